use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::feedback::MailError;
use crate::store::StoreError;

/// Errors surfaced to HTTP clients as `{"error": "..."}`.
///
/// `LoadFailed` is the "could not load data" state; an empty result is never
/// an error and is rendered as an empty view instead.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("failed to load data")]
    LoadFailed(#[source] StoreError),
    #[error("feedback mail is not configured")]
    MailUnavailable,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::LoadFailed(_) | Self::MailUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        error!(error = %e, "store request failed");
        Self::LoadFailed(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        warn!(error = %e, "rejected request body");
        Self::BadRequest("Invalid request body")
    }
}

impl From<MailError> for ApiError {
    fn from(e: MailError) -> Self {
        error!(error = %e, "feedback mail failed");
        Self::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
