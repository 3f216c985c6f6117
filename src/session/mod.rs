//! Per-request user session.
//!
//! Sign-in happens at the hosted auth provider; this module only verifies
//! the bearer token it issued and hands handlers an explicit [`Session`].

mod claims;
mod extractors;

use axum::extract::FromRef;
use jsonwebtoken::{decode, DecodingKey, Validation};
use tracing::debug;

use crate::state::AppState;

pub use claims::Claims;
pub use extractors::Session;

/// Token verification keys derived from the auth config.
#[derive(Clone)]
pub struct SessionKeys {
    pub decoding: DecodingKey,
    pub issuer: Option<String>,
    pub audience: String,
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> Self {
        let auth = &state.config.auth;
        Self {
            decoding: DecodingKey::from_secret(auth.secret.as_bytes()),
            issuer: auth.issuer.clone(),
            audience: auth.audience.clone(),
        }
    }
}

impl SessionKeys {
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(std::slice::from_ref(issuer));
        }
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "session token verified");
        Ok(data.claims)
    }
}
