//! Photo handlers.

mod upload_photo;

pub use upload_photo::{UploadPhotoCommand, UploadPhotoHandler};
