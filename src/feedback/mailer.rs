use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

use super::dto::FeedbackMessage;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail API rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait FeedbackMailer: Send + Sync {
    async fn send(&self, message: &FeedbackMessage) -> Result<(), MailError>;
}

/// Transactional mail through the Resend HTTP API.
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    from: String,
    to: String,
}

#[derive(Serialize)]
struct ResendEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: String,
    html: String,
    text: String,
}

impl ResendMailer {
    pub fn new(api_key: &str, from: &str, to: &str) -> Result<Self, MailError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

#[async_trait]
impl FeedbackMailer for ResendMailer {
    #[instrument(skip_all, fields(kind = %message.kind))]
    async fn send(&self, message: &FeedbackMessage) -> Result<(), MailError> {
        let body = ResendEmail {
            from: &self.from,
            to: [&self.to],
            subject: message.subject(),
            html: message.html(),
            text: message.text(),
        };
        let response = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        debug!(%status, "feedback mail accepted");
        Ok(())
    }
}
