use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access-token payload issued by the hosted auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,                // user ID
    pub exp: usize,               // expires at (unix timestamp)
    #[serde(default)]
    pub iat: Option<usize>,       // issued at
    pub aud: String,              // audience
    #[serde(default)]
    pub iss: Option<String>,      // issuer
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,     // "authenticated" for signed-in users
}

impl Claims {
    /// Tokens minted for anonymous API access carry the `anon` role.
    pub fn is_anonymous(&self) -> bool {
        self.role.as_deref() == Some("anon")
    }
}
