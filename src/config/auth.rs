//! Authentication configuration
//!
//! Access tokens come from the hosted auth service and are HS256-signed with
//! the project's JWT secret. Without this section every bearer token is
//! rejected.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Shortest secret accepted; the hosted service issues 40+ character secrets.
const MIN_SECRET_LEN: usize = 32;

/// Hosted-auth JWT settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Project JWT secret
    pub jwt_secret: SecretString,

    /// Expected `aud` claim
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Expected `iss` claim, usually `{project_url}/auth/v1`
    #[serde(default)]
    pub issuer: Option<String>,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: SecretString::new(jwt_secret.into()),
            audience: default_audience(),
            issuer: None,
        }
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort(MIN_SECRET_LEN));
        }
        if self.audience.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__AUDIENCE"));
        }
        Ok(())
    }
}

fn default_audience() -> String {
    "authenticated".to_string()
}
