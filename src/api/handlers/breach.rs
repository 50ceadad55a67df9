// src/api/handlers/breach.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::api::types::{CompromiseCheckRequest, CompromiseCheckResponse};
use crate::api::utils::bad_request;
use crate::api::AppState;

/// Check if a password has been compromised
///
/// Only the first five hex characters of the SHA-1 hash are sent upstream.
#[utoipa::path(
    post,
    path = "/api/check-compromised",
    tag = "Breach",
    request_body = CompromiseCheckRequest,
    responses(
        (status = 200, description = "Lookup result", body = CompromiseCheckResponse),
        (status = 400, description = "Password missing", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn check_compromised(
    state: web::Data<AppState>,
    body: web::Json<CompromiseCheckRequest>,
) -> HttpResponse {
    if body.password.is_empty() {
        return bad_request("Password is required");
    }

    let result = state.breach.check(&body.password).await;

    HttpResponse::Ok().json(CompromiseCheckResponse {
        is_compromised: result.is_compromised(),
        compromise_count: result.compromise_count(),
        breach_status: result.status(),
        checked_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::app_state_with;
    use crate::breach::tests::FakeRange;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    // SHA-1("password") suffix after the 5BAA6 prefix
    const PASSWORD_SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

    #[actix_web::test]
    async fn known_password_is_reported_with_count() {
        let source = Arc::new(FakeRange::with_body(&format!("{}:3861493\n", PASSWORD_SUFFIX)));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state_with(source)))
                .route("/api/check-compromised", web::post().to(check_compromised)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/check-compromised")
            .set_json(json!({ "password": "password" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["is_compromised"], true);
        assert_eq!(body["compromise_count"], 3861493);
        assert_eq!(body["breach_status"], "compromised");
        assert!(body["checked_at"].is_string());

        // Second call inside the window is rate limited.
        let req = test::TestRequest::post()
            .uri("/api/check-compromised")
            .set_json(json!({ "password": "password" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["is_compromised"], false);
        assert!(body["compromise_count"].is_null());
        assert_eq!(body["breach_status"], "unknown");
    }

    #[actix_web::test]
    async fn empty_password_is_rejected() {
        let source = Arc::new(FakeRange::with_body(""));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state_with(Arc::clone(&source))))
                .route("/api/check-compromised", web::post().to(check_compromised)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/check-compromised")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Password is required");
        assert_eq!(source.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }
}
