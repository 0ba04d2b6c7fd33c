//! Hosted-auth adapter for JWT validation.
//!
//! The managed backend signs access tokens with a per-project HS256 secret.
//! This adapter implements the `SessionValidator` port by:
//!
//! 1. Verifying the HS256 signature with the project secret
//! 2. Validating audience, expiry and (optionally) issuer claims
//! 3. Mapping `sub`/`email` claims to the domain `AuthenticatedUser`
//!
//! # Example
//!
//! ```ignore
//! use bean_passport::adapters::auth::{SupabaseAuthConfig, SupabaseJwtValidator};
//!
//! let validator = SupabaseJwtValidator::new(SupabaseAuthConfig::new(secret, "authenticated"));
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the hosted-auth JWT validator.
#[derive(Clone)]
pub struct SupabaseAuthConfig {
    /// Project JWT secret used to sign access tokens.
    pub jwt_secret: SecretString,

    /// Expected audience claim (the hosted service uses "authenticated").
    pub audience: String,

    /// Expected issuer, when set. Usually `{project_url}/auth/v1`.
    pub issuer: Option<String>,
}

impl SupabaseAuthConfig {
    pub fn new(jwt_secret: SecretString, audience: impl Into<String>) -> Self {
        Self {
            jwt_secret,
            audience: audience.into(),
            issuer: None,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }
}

/// JWT claims read from hosted-auth access tokens.
///
/// `aud`, `exp` and `iss` are checked by `jsonwebtoken` during decoding.
#[derive(Debug, Serialize, Deserialize)]
struct AccessTokenClaims {
    /// Subject - the user ID
    sub: String,

    #[serde(default)]
    email: Option<String>,

    /// "authenticated" for signed-in users, "anon" for the public key
    #[serde(default)]
    role: Option<String>,
}

/// Validates HS256 access tokens issued by the hosted auth service.
pub struct SupabaseJwtValidator {
    config: SupabaseAuthConfig,
    decoding_key: DecodingKey,
}

impl SupabaseJwtValidator {
    pub fn new(config: SupabaseAuthConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes());
        Self {
            config,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        if let Some(issuer) = &self.config.issuer {
            validation.set_issuer(&[issuer]);
        }
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);
        validation
    }
}

#[async_trait]
impl SessionValidator for SupabaseJwtValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Invalid audience in token");
                        AuthError::InvalidToken
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Invalid issuer in token");
                        AuthError::InvalidToken
                    }
                    _ => {
                        tracing::debug!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })?
            .claims;

        if claims.role.as_deref() == Some("anon") {
            tracing::debug!("Rejecting anonymous-role token");
            return Err(AuthError::InvalidToken);
        }

        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Invalid user ID in token: {:?}", claims.sub);
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.email))
    }
}

impl std::fmt::Debug for SupabaseJwtValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseJwtValidator")
            .field("audience", &self.config.audience)
            .field("issuer", &self.config.issuer)
            .finish_non_exhaustive()
    }
}
