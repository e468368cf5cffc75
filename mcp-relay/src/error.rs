use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::models::SupabaseAction;

/// Fallback message for internal failures that carry no text of their own.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred processing the request";

/// Request-scoped failures. Every variant renders as a JSON envelope with a
/// top-level `error` key.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Table name is required")]
    MissingTable,

    #[error("Record data is required")]
    MissingData,

    #[error("Filter parameters are required")]
    MissingFilter,

    #[error("Unsupported action: {0}")]
    UnsupportedAction(String),

    #[error("Unsupported YouTube action: {0}")]
    UnsupportedTranscriptAction(String),

    #[error("Invalid JSON body: {0}")]
    MalformedBody(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    supported_actions: Option<Vec<&'static str>>,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            RelayError::UnsupportedAction(_) => ErrorResponse {
                error: self.to_string(),
                supported_actions: Some(SupabaseAction::supported()),
            },
            RelayError::Internal(err) => {
                tracing::error!(error = ?err, "Error processing request");
                let message = err.to_string();
                ErrorResponse {
                    error: if message.is_empty() {
                        GENERIC_ERROR_MESSAGE.to_string()
                    } else {
                        message
                    },
                    supported_actions: None,
                }
            }
            _ => {
                tracing::debug!(error = %self, "Rejected request");
                ErrorResponse {
                    error: self.to_string(),
                    supported_actions: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
