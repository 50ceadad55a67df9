// src/api/utils.rs

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use log::warn;

use crate::api::types::ErrorResponse;

/// 400 for requests that are well formed but cannot be served.
pub fn bad_request(detail: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse { detail: detail.into() })
}

/// 422 for field values outside their allowed ranges.
pub fn unprocessable(detail: impl Into<String>) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse { detail: detail.into() })
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("❌ Rejected JSON body for {}: {}", req.path(), err);
    let response = unprocessable(err.to_string());
    InternalError::from_response(err, response).into()
}

/// JSON extractor config answering malformed bodies with `{detail}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
