use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use super::dto::{FeedbackMessage, FeedbackRequest, FeedbackResponse, DEFAULT_KIND};
use crate::{error::ApiError, state::AppState};

pub fn feedback_routes() -> Router<AppState> {
    Router::new().route("/feedback", post(send_feedback))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Checks the form and fills in the default message type.
pub(crate) fn validate(payload: FeedbackRequest) -> Result<FeedbackMessage, ApiError> {
    let (Some(name), Some(email), Some(message)) = (
        required(payload.name),
        required(payload.email),
        required(payload.message),
    ) else {
        return Err(ApiError::BadRequest("Name, email and message are required."));
    };
    if !is_valid_email(&email) {
        return Err(ApiError::BadRequest("Invalid email"));
    }
    Ok(FeedbackMessage {
        kind: required(payload.kind).unwrap_or_else(|| DEFAULT_KIND.to_string()),
        name,
        email,
        message,
    })
}

#[instrument(skip(state, payload))]
pub async fn send_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let Json(payload) = payload?;
    let message = validate(payload).inspect_err(|e| warn!(error = %e, "invalid feedback"))?;

    let Some(mailer) = state.mailer.as_ref() else {
        warn!("feedback received but mail relay is not configured");
        return Err(ApiError::MailUnavailable);
    };
    mailer.send(&message).await?;

    info!(kind = %message.kind, "feedback relayed");
    Ok(Json(FeedbackResponse { success: true }))
}
