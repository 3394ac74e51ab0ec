//! Outbound port for storing uploaded point images.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while persisting an uploaded image.
    pub enum ImageStoreError {
        /// The underlying storage rejected or failed the write.
        Io { message: String } =>
            "image store write failed: {message}",
    }
}

/// An uploaded image as received from the inbound adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Client-supplied filename, used as a suffix of the stored name.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Port for storing uploaded images and returning their stored filename.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist the upload and return the relative filename it was stored
    /// under. The stored name always ends with the sanitised original
    /// filename so clients can recognise their upload.
    async fn save(&self, upload: ImageUpload) -> Result<String, ImageStoreError>;
}

/// Fixture implementation that pretends every upload was stored under its
/// original name.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureImageStore;

#[async_trait]
impl ImageStore for FixtureImageStore {
    async fn save(&self, upload: ImageUpload) -> Result<String, ImageStoreError> {
        Ok(upload.file_name)
    }
}
