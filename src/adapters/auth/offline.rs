//! Session validator used when no auth service is configured.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Treats every request as unauthenticated.
///
/// Public routes keep working; protected routes answer 401.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineSessionValidator;

#[async_trait]
impl SessionValidator for OfflineSessionValidator {
    async fn validate(&self, _token: &str) -> Result<AuthenticatedUser, AuthError> {
        tracing::debug!("Auth not configured; rejecting token");
        Err(AuthError::InvalidToken)
    }
}
