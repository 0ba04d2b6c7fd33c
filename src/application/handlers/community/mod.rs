//! Community handlers.

mod get_community;

pub use get_community::{GetCommunityHandler, GetCommunityQuery};
