use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the summary service.
///
/// The variants map onto the two failure classes of the API: client errors
/// (invalid input, reported as 400) and provider errors (anything that goes
/// wrong while talking to OpenAI, reported as 500). The Display string of a
/// variant is exactly the `error` field of the JSON body the caller sees.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No headlines provided")]
    EmptyHeadlines,

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// The HTTP status this error translates to at the API boundary.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyHeadlines => StatusCode::BAD_REQUEST,
            Self::OpenAIError(_) | Self::HttpError(_) | Self::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpError(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
