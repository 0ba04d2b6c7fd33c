//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod community;
pub mod journal;
pub mod journey;
pub mod photos;
pub mod profile;

pub use community::{GetCommunityHandler, GetCommunityQuery};
pub use journal::{ListEntriesHandler, ListEntriesQuery, RecordEntryCommand, RecordEntryHandler};
pub use journey::{
    GetCalendarHandler, GetCalendarQuery, GetJourneyMapHandler, GetJourneyMapQuery,
    GetPassportHandler, GetPassportQuery, GetProgressHandler, GetProgressQuery,
};
pub use photos::{UploadPhotoCommand, UploadPhotoHandler};
pub use profile::{
    GetProfileHandler, GetProfileQuery, UploadProfilePictureCommand, UploadProfilePictureHandler,
};
