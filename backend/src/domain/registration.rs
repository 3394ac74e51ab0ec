//! Registration service implementation.
//!
//! Coordinates validation, image storage, and the transactional insert of a
//! collection point with its item associations.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    ImageStore, NewCollectPoint, PointRepository, PointRepositoryError, RegistrationRequest,
    RegistrationService,
};
use crate::domain::{CollectPoint, Error, PointValidationError};

/// Port-backed [`RegistrationService`] implementation.
pub struct RegistrationServiceImpl {
    points: Arc<dyn PointRepository>,
    images: Arc<dyn ImageStore>,
}

impl RegistrationServiceImpl {
    /// Create the service with its outbound dependencies.
    pub fn new(points: Arc<dyn PointRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { points, images }
    }
}

fn validation_error(err: &PointValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({ "field": err.field() }))
}

/// Validate everything before any write so a rejected request leaves no
/// trace, neither an image file nor rows.
fn validate_request(request: &RegistrationRequest) -> Result<(), Error> {
    request.input.validate().map_err(|err| validation_error(&err))?;
    if request.item_ids.is_empty() {
        return Err(validation_error(&PointValidationError::NoItems));
    }
    if request.image.file_name.trim().is_empty() || request.image.bytes.is_empty() {
        return Err(
            Error::invalid_request("an image file is required").with_details(json!({
                "field": "image"
            })),
        );
    }
    Ok(())
}

fn map_repository_error(error: PointRepositoryError) -> Error {
    match error {
        PointRepositoryError::UnknownItem { message } => {
            warn!(%message, "registration referenced an unknown item");
            Error::invalid_request("items contains an unknown item id")
                .with_details(json!({ "field": "items" }))
        }
        PointRepositoryError::Connection { message } | PointRepositoryError::Query { message } => {
            Error::internal(message)
        }
    }
}

#[async_trait]
impl RegistrationService for RegistrationServiceImpl {
    async fn register(&self, request: RegistrationRequest) -> Result<CollectPoint, Error> {
        validate_request(&request)?;

        let RegistrationRequest {
            input,
            item_ids,
            image,
        } = request;

        let stored_image = self
            .images
            .save(image)
            .await
            .map_err(|err| Error::internal(err.to_string()))?;

        let point = self
            .points
            .create(
                NewCollectPoint {
                    input,
                    image: stored_image,
                },
                item_ids,
            )
            .await
            .map_err(map_repository_error)?;

        info!(point_id = point.id(), city = point.city(), "collection point registered");
        Ok(point)
    }
}
