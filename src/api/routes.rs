// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::system::root));

    cfg.service(
        web::scope("/api")
            // Generation
            .route("/generate", web::post().to(handlers::generator::generate_password))
            .route("/generate/bulk", web::post().to(handlers::generator::generate_bulk_passwords))
            .route("/generate/readable", web::post().to(handlers::generator::generate_readable_password))
            .route("/generate/pronounceable", web::post().to(handlers::generator::generate_pronounceable_password))
            .route("/generate/passphrase", web::post().to(handlers::generator::generate_passphrase))

            // Breach lookup
            .route("/check-compromised", web::post().to(handlers::breach::check_compromised))

            // Liveness
            .route("/health", web::get().to(handlers::system::health_check))
    );
}
