//! Profile handlers.

mod get_profile;
mod upload_profile_picture;

pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use upload_profile_picture::{UploadProfilePictureCommand, UploadProfilePictureHandler};
