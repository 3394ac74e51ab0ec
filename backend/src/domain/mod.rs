//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.

pub mod assets;
pub mod error;
pub mod item;
pub mod point;
pub mod ports;
pub mod registration;

pub use self::assets::{AssetUrlBase, AssetUrlBaseError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::item::{Item, ItemValidationError};
pub use self::point::{CollectPoint, CollectPointDraft, CollectPointInput, PointValidationError};
pub use self::registration::RegistrationServiceImpl;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use ecoleta_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Point not found."))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
