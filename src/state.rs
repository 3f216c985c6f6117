use std::sync::Arc;

use anyhow::Context;

use crate::config::AppConfig;
use crate::feedback::{FeedbackMailer, ResendMailer};
use crate::store::{NutritionStore, PgStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn NutritionStore>,
    pub mailer: Option<Arc<dyn FeedbackMailer>>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store = Arc::new(
            PgStore::connect(&config.database_url)
                .await
                .context("connect to database")?,
        ) as Arc<dyn NutritionStore>;

        let mailer = match &config.feedback.api_key {
            Some(api_key) => Some(Arc::new(ResendMailer::new(
                api_key,
                &config.feedback.from,
                &config.feedback.to,
            )?) as Arc<dyn FeedbackMailer>),
            None => {
                tracing::warn!("RESEND_API_KEY not set; feedback relay disabled");
                None
            }
        };

        Ok(Self::from_parts(config, store, mailer))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        store: Arc<dyn NutritionStore>,
        mailer: Option<Arc<dyn FeedbackMailer>>,
    ) -> Self {
        Self {
            config,
            store,
            mailer,
        }
    }
}
