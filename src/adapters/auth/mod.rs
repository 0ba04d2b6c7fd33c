//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `supabase` - HS256 access tokens from the hosted auth service
//! - `offline` - Rejects everything when auth is not configured
//! - `mock` - Test implementation that doesn't require external services

mod mock;
mod offline;
mod supabase;

pub use mock::MockSessionValidator;
pub use offline::OfflineSessionValidator;
pub use supabase::{SupabaseAuthConfig, SupabaseJwtValidator};
