use std::sync::Arc;

use crate::error::{CompletionError, TripPlanError};
use crate::models::prompt::PromptMessages;
use crate::services::completion_service::{CompletionRequest, CompletionService};

pub const PLAN_TEMPERATURE: f64 = 0.7;

#[derive(Clone)]
pub struct PlanGenerator {
    completion: Arc<dyn CompletionService>,
    model: String,
}

impl PlanGenerator {
    pub fn new(completion: Arc<dyn CompletionService>, model: impl Into<String>) -> Self {
        Self {
            completion,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn credential_hint(&self) -> String {
        self.completion.credential_hint()
    }

    pub fn request_for(&self, messages: &PromptMessages) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            temperature: PLAN_TEMPERATURE,
            messages: messages.to_messages(),
        }
    }

    /// Returns the model's plan text untouched. Whether the model kept to the
    /// supplied catalog is not checked.
    pub async fn generate(&self, messages: &PromptMessages) -> Result<String, TripPlanError> {
        let request = self.request_for(messages);

        match self.completion.complete(&request).await {
            Ok(plan) => Ok(plan),
            Err(err @ CompletionError::Timeout(_)) => {
                log::error!("Error generating trip plan (timeout): {}", err);
                Err(TripPlanError::CompletionTimeout(err))
            }
            Err(err) => {
                log::error!("Error generating trip plan: {}", err);
                Err(TripPlanError::Completion(err))
            }
        }
    }
}
