use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::{catalog::CatalogCategory, trip::ErrorResponse};

/// Failure of a single data-store read.
#[derive(Debug, Error)]
pub enum CatalogFetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Data store returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode rows: {0}")]
    Decode(String),
    #[error("Invalid data store configuration: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Completion request timed out: {0}")]
    Timeout(String),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Completion API returned status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse completion response: {0}")]
    Decode(String),
    #[error("Completion response contained no usable content")]
    EmptyResponse,
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CompletionError::Timeout(err.to_string())
        } else if err.is_decode() {
            CompletionError::Decode(err.to_string())
        } else {
            CompletionError::Http(err.to_string())
        }
    }
}

/// Everything that can end a trip plan request early. The `Display` text is
/// for logs; clients only ever see [`TripPlanError::public_message`].
#[derive(Debug, Error)]
pub enum TripPlanError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("Failed to fetch {category}: {source}")]
    Repository {
        category: CatalogCategory,
        #[source]
        source: CatalogFetchError,
    },
    #[error("No activities found for province '{0}'")]
    NotFound(String),
    #[error("Completion service timed out: {0}")]
    CompletionTimeout(#[source] CompletionError),
    #[error("Completion service failed: {0}")]
    Completion(#[source] CompletionError),
}

impl TripPlanError {
    pub fn public_message(&self) -> String {
        match self {
            TripPlanError::MalformedRequest(message) => message.clone(),
            TripPlanError::Repository { category, .. } => format!("Failed to fetch {}", category),
            TripPlanError::NotFound(_) => "No activities found for this province".to_string(),
            TripPlanError::CompletionTimeout(_) => "Trip plan generation timed out".to_string(),
            TripPlanError::Completion(_) => "Server Error".to_string(),
        }
    }
}

impl ResponseError for TripPlanError {
    fn status_code(&self) -> StatusCode {
        match self {
            TripPlanError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            TripPlanError::NotFound(_) => StatusCode::NOT_FOUND,
            TripPlanError::Repository { .. }
            | TripPlanError::CompletionTimeout(_)
            | TripPlanError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
        })
    }
}
