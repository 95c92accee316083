use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::validation::FieldErrors;

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// A common error type that can be used throughout the API.
///
/// Can be returned in a `Result` from an API handler function. Every variant is
/// rendered as a JSON body with `success: false`, so the site can show the message
/// next to the form.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] FieldErrors),
    #[error("{0}")]
    MalformedBody(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    /// The company email could not be sent. `test_mode` is echoed back to the site.
    #[error("{source}")]
    Delivery {
        test_mode: bool,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Delivery { .. } | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Validation(errors) => {
                tracing::warn!(?errors, "submission failed validation");
                schema::Error {
                    success: false,
                    message: "Validation failed".to_owned(),
                    errors: Some(errors.iter().map(schema::ErrorDetails::from).collect()),
                    test_mode: None,
                }
            }
            Self::MalformedBody(detail) => {
                tracing::warn!(detail = %detail, "rejected malformed request body");
                schema::Error {
                    success: false,
                    message: format!("Invalid request body: {}", detail),
                    errors: None,
                    test_mode: None,
                }
            }
            Self::PayloadTooLarge(detail) => {
                tracing::warn!(detail = %detail, "rejected oversized request body");
                schema::Error {
                    success: false,
                    message: "Request body is too large.".to_owned(),
                    errors: None,
                    test_mode: None,
                }
            }
            Self::Delivery { test_mode, source } => {
                tracing::error!("{:?}", source);
                schema::Error {
                    success: false,
                    message: "Failed to send your request. Please try again later.".to_owned(),
                    errors: None,
                    test_mode: Some(*test_mode),
                }
            }
            Self::Unexpected(e) => {
                tracing::error!("{:?}", e);
                schema::Error {
                    success: false,
                    message: "Unexpected error".to_owned(),
                    errors: None,
                    test_mode: None,
                }
            }
        };

        (self.status_code(), Json(body)).into_response()
    }
}
