use actix_web::{error::InternalError, web, HttpResponse};

use crate::models::trip::ErrorResponse;

pub mod health;
pub mod trip_plan;

/// Bad JSON bodies get the same `{ "error": ... }` shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Invalid request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse {
            error: format!("Invalid request body: {}", err),
        });
        InternalError::from_response(err, response).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .route(
            "/generate-trip-plan",
            web::post().to(trip_plan::generate_trip_plan),
        );
}
