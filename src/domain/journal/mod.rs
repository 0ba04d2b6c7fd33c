//! Journal - the user's logged coffee entries.

mod entry;

pub use entry::{CoffeeEntry, NewCoffeeEntry, MAX_NOTE_CHARS};
