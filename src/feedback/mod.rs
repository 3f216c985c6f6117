//! Contact form relay to a transactional e-mail API.

mod dto;
pub mod handlers;
mod mailer;

use crate::state::AppState;
use axum::Router;

pub use dto::FeedbackMessage;
pub use mailer::{FeedbackMailer, MailError, ResendMailer};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::feedback_routes())
}
