use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::trip_plan_service::TripPlanService;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/*
    /health
*/
pub async fn health_check(service: web::Data<TripPlanService>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let catalog_result = check_catalog(&service).await;
    health
        .services
        .insert("supabase".to_string(), catalog_result.clone());

    // Only reports configuration; a probe would spend tokens
    health.services.insert(
        "completion".to_string(),
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "Model configured: {}, API key: {}",
                service.model(),
                service.credential_hint()
            )),
        },
    );

    if catalog_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_catalog(service: &TripPlanService) -> ServiceStatus {
    match service.check_catalog().await {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Connected successfully to Supabase".to_string()),
        },
        Err(e) => {
            log::error!("Supabase health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some("Failed to reach the catalog data store".to_string()),
            }
        }
    }
}
