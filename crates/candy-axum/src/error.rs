//! Axum-specific error type and response mapping.
//!
//! Every failure becomes a 500 carrying one fixed, human-readable message
//! per operation. The underlying error is logged, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// A failed request, tagged with the message shown to the user.
#[derive(Debug, Error)]
#[error("{message}: {source}")]
pub struct HttpError {
    message: &'static str,
    #[source]
    source: anyhow::Error,
}

impl HttpError {
    pub fn new(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self {
            message,
            source: source.into(),
        }
    }

    /// The message returned in the response body.
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        tracing::error!(error = %format!("{:#}", self.source), "{}", self.message);
        (StatusCode::INTERNAL_SERVER_ERROR, self.message).into_response()
    }
}

/// Attach the user-facing message for the current operation to a failure.
pub trait HttpResultExt<T> {
    fn or_http(self, message: &'static str) -> Result<T, HttpError>;
}

impl<T, E> HttpResultExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn or_http(self, message: &'static str) -> Result<T, HttpError> {
        self.map_err(|e| HttpError::new(message, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candy_core::{CoreError, RepositoryError};

    #[test]
    fn test_any_error_maps_to_500_with_fixed_message() {
        let err: Result<(), CoreError> =
            Err(RepositoryError::NotFound("Candy with ID 9".to_string()).into());

        let response = err.or_http("Error loading the candy").unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_includes_source() {
        let err = HttpError::new(
            "Error adding the candy",
            CoreError::Validation("Candy name is required".to_string()),
        );
        assert_eq!(err.message(), "Error adding the candy");
        assert!(err.to_string().contains("Candy name is required"));
    }
}
