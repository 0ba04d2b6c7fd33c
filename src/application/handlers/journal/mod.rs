//! Journal handlers.
//!
//! ## Commands
//! - Record a coffee entry
//!
//! ## Queries
//! - List a user's entries

mod list_entries;
mod record_entry;

pub use list_entries::{ListEntriesHandler, ListEntriesQuery};
pub use record_entry::{RecordEntryCommand, RecordEntryHandler};
