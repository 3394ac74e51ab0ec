//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod image_store;
mod item_repository;
mod point_repository;
mod registration_service;

#[cfg(test)]
pub use image_store::MockImageStore;
pub use image_store::{FixtureImageStore, ImageStore, ImageStoreError, ImageUpload};
#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{FixtureItemRepository, ItemRepository, ItemRepositoryError};
#[cfg(test)]
pub use point_repository::MockPointRepository;
pub use point_repository::{
    FixturePointRepository, NewCollectPoint, PointRepository, PointRepositoryError,
    PointSearchFilter,
};
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::{
    FixtureRegistrationService, RegistrationRequest, RegistrationService,
};
