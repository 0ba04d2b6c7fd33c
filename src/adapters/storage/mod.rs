//! Photo storage adapters.

mod supabase_storage;

pub use supabase_storage::{
    SupabasePhotoStorage, SupabaseStorageConfig, DEFAULT_AVATAR_BUCKET, DEFAULT_BUCKET,
};
