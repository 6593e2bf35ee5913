use actix_web::{web, HttpResponse};

use crate::error::TripPlanError;
use crate::models::trip::{TripPlanInput, TripPlanResponse};
use crate::services::trip_plan_service::TripPlanService;

/*
    /generate-trip-plan
*/
pub async fn generate_trip_plan(
    service: web::Data<TripPlanService>,
    input: web::Json<TripPlanInput>,
) -> Result<HttpResponse, TripPlanError> {
    let request = input.into_inner().validate().map_err(|err| {
        log::warn!("Rejected trip plan request: {}", err);
        err
    })?;

    let plan = service.generate_trip_plan(&request).await?;
    Ok(HttpResponse::Ok().json(TripPlanResponse { plan }))
}
