// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::breach::BreachChecker;
use crate::core::config::Config;

/// State shared by every worker. The breach checker owns the process-wide
/// rate limiter.
pub struct AppState {
    pub breach: BreachChecker,
}

impl AppState {
    pub fn new(breach: BreachChecker) -> Self {
        Self { breach }
    }
}

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::generate_bulk_passwords,
        crate::api::handlers::generator::generate_readable_password,
        crate::api::handlers::generator::generate_pronounceable_password,
        crate::api::handlers::generator::generate_passphrase,

        // Breach endpoints
        crate::api::handlers::breach::check_compromised,

        // System endpoints
        crate::api::handlers::system::root,
        crate::api::handlers::system::health_check
    ),
    components(
        schemas(
            crate::api::types::PasswordRequest,
            crate::api::types::BulkPasswordRequest,
            crate::api::types::ReadablePasswordRequest,
            crate::api::types::PassphraseRequest,
            crate::api::types::CompromiseCheckRequest,
            crate::api::types::CompromiseInfo,
            crate::api::types::GeneratedPassword,
            crate::api::types::PasswordResponse,
            crate::api::types::BulkPasswordResponse,
            crate::api::types::ReadablePasswordResponse,
            crate::api::types::PronounceablePasswordResponse,
            crate::api::types::PassphraseResponse,
            crate::api::types::CompromiseCheckResponse,
            crate::api::types::HealthResponse,
            crate::api::types::ServiceInfoResponse,
            crate::api::types::ErrorResponse,
            crate::generators::SecurityStandard,
            crate::generators::Strength,
            crate::models::BreachStatus
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "Breach", description = "k-anonymity breach lookup"),
        (name = "System", description = "Service information and liveness")
    ),
    info(
        title = "Secure Password Generator API",
        version = "0.1.0",
        description = "Random, readable, pronounceable and passphrase credentials with entropy estimates",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(state: AppState, config: &Config) -> std::io::Result<()> {
    log::info!(
        "Starting password generator API on {}:{}",
        config.web_address,
        config.web_port
    );

    let state = web::Data::new(state);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .app_data(utils::json_config())
            .service(
                web::resource("/api-docs/openapi.json")
                    .route(web::get().to(|| async { web::Json(ApiDoc::openapi()) })),
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use super::AppState;
    use crate::breach::tests::FakeRange;
    use crate::breach::{BreachChecker, RateLimiter};

    pub(crate) fn app_state_with(source: Arc<FakeRange>) -> AppState {
        AppState::new(BreachChecker::new(
            Arc::new(RateLimiter::default()),
            source,
            Duration::from_secs(5),
        ))
    }

    pub(crate) fn app_state() -> AppState {
        app_state_with(Arc::new(FakeRange::with_body("")))
    }
}
