use std::sync::Arc;

use crate::config::EmptyActivitiesPolicy;
use crate::error::{CatalogFetchError, TripPlanError};
use crate::models::prompt::PromptMessages;
use crate::models::trip::TripRequest;
use crate::services::catalog_renderer::render_catalog;
use crate::services::catalog_repository::{fetch_by_province, CatalogRepository};
use crate::services::plan_generator::PlanGenerator;
use crate::services::prompt_builder;

/// Request-scoped pipeline: catalog lookup, rendering, prompt, completion.
/// Holds only shared immutable handles, so one instance serves every request.
pub struct TripPlanService {
    repository: Arc<dyn CatalogRepository>,
    generator: PlanGenerator,
    empty_activities: EmptyActivitiesPolicy,
}

impl TripPlanService {
    pub fn new(
        repository: Arc<dyn CatalogRepository>,
        generator: PlanGenerator,
        empty_activities: EmptyActivitiesPolicy,
    ) -> Self {
        Self {
            repository,
            generator,
            empty_activities,
        }
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    pub fn credential_hint(&self) -> String {
        self.generator.credential_hint()
    }

    pub async fn prepare_prompt(
        &self,
        request: &TripRequest,
    ) -> Result<PromptMessages, TripPlanError> {
        let catalog = fetch_by_province(self.repository.as_ref(), &request.province).await?;
        log::info!(
            "Catalog for '{}': {} activities, {} restaurants, {} hotels",
            request.province,
            catalog.activities.len(),
            catalog.restaurants.len(),
            catalog.hotels.len()
        );

        if catalog.activities.is_empty() && self.empty_activities == EmptyActivitiesPolicy::Reject
        {
            log::warn!("No activities found for '{}'", request.province);
            return Err(TripPlanError::NotFound(request.province.clone()));
        }

        let sections = render_catalog(&catalog);
        log::debug!("Activities:\n{}", sections.activities);
        log::debug!("Restaurants:\n{}", sections.restaurants);
        log::debug!("Hotels:\n{}", sections.hotels);

        Ok(prompt_builder::build(request, &sections))
    }

    pub async fn generate_trip_plan(&self, request: &TripRequest) -> Result<String, TripPlanError> {
        log::info!(
            "Trip plan requested: province='{}' style='{}' budget='{}' days={}",
            request.province,
            request.style,
            request.budget,
            request.days
        );

        let messages = self.prepare_prompt(request).await?;
        self.generator.generate(&messages).await
    }

    pub async fn check_catalog(&self) -> Result<(), CatalogFetchError> {
        self.repository.ping().await
    }
}
