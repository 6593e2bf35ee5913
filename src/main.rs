use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trip_plan_api::config::AppConfig;
use trip_plan_api::db::supabase::create_supabase_client;
use trip_plan_api::routes;
use trip_plan_api::services::catalog_repository::SupabaseCatalogRepository;
use trip_plan_api::services::completion_service::OpenAIClient;
use trip_plan_api::services::plan_generator::PlanGenerator;
use trip_plan_api::services::trip_plan_service::TripPlanService;

fn startup_error(err: impl std::fmt::Display) -> io::Error {
    log::error!("Missing or invalid configuration: {}", err);
    io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // No request is served without credentials
    let config = AppConfig::from_env().map_err(startup_error)?;
    log::info!("Configuration loaded: {:?}", config);

    let supabase = create_supabase_client(&config.supabase_url, &config.supabase_service_role_key)
        .map_err(startup_error)?;
    let openai = OpenAIClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.completion_timeout,
    )
    .map_err(startup_error)?;

    let service = web::Data::new(TripPlanService::new(
        Arc::new(SupabaseCatalogRepository::new(supabase)),
        PlanGenerator::new(Arc::new(openai), config.openai_model.clone()),
        config.empty_activities,
    ));

    log::info!("Server is running on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(routes::config)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
