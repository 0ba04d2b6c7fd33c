//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CoffeeEntryRepository` - Append-only journal storage
//! - `ProfileRepository` - Per-user profile rows and the user count
//! - `PhotoStorage` - Object storage for entry photos and avatars
//! - `SessionValidator` - Bearer token validation

mod coffee_entry_repository;
mod photo_storage;
mod profile_repository;
mod session_validator;

pub use coffee_entry_repository::CoffeeEntryRepository;
pub use photo_storage::{
    PhotoStorage, PhotoUpload, StorageError, StoredPhoto, ALLOWED_CONTENT_TYPES, AVATAR_PREFIX,
    DEFAULT_MAX_UPLOAD_BYTES,
};
pub use profile_repository::ProfileRepository;
pub use session_validator::SessionValidator;
