//! Driving port for collection point registration.
//!
//! Inbound adapters hand the parsed multipart form to this port; the
//! implementation validates, stores the image, and persists the point plus
//! its associations atomically.

use async_trait::async_trait;

use crate::domain::{CollectPoint, CollectPointDraft, CollectPointInput, Error};

use super::image_store::ImageUpload;

/// Request payload for registering a collection point.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Contact and location profile from the form fields.
    pub input: CollectPointInput,
    /// Item categories the point accepts; must be non-empty.
    pub item_ids: Vec<i32>,
    /// The uploaded point photo.
    pub image: ImageUpload,
}

/// Driving port for point registration.
///
/// Implementations must fail fast: no write (image or rows) happens unless
/// the whole request passes validation, and the point row plus its
/// association rows commit in one transaction or not at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new collection point.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: a field fails validation, no items were
    ///   requested, or an item id does not exist.
    /// - `InternalError`: storage failure; nothing was persisted.
    async fn register(&self, request: RegistrationRequest) -> Result<CollectPoint, Error>;
}

/// Fixture implementation that accepts every valid-looking request.
#[derive(Debug, Default)]
pub struct FixtureRegistrationService;

#[async_trait]
impl RegistrationService for FixtureRegistrationService {
    async fn register(&self, request: RegistrationRequest) -> Result<CollectPoint, Error> {
        let RegistrationRequest {
            input,
            item_ids,
            image,
        } = request;
        CollectPoint::new(CollectPointDraft {
            id: 1,
            image: image.file_name,
            input,
            item_ids,
        })
        .map_err(|err| Error::invalid_request(err.to_string()))
    }
}
