//! Persistence port for collection points and their item associations.

use async_trait::async_trait;

use crate::domain::{CollectPoint, CollectPointDraft, CollectPointInput};

use super::define_port_error;

define_port_error! {
    /// Errors raised by collection point persistence.
    pub enum PointRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "point store connection failed: {message}",
        /// Query or statement failed during execution or row conversion.
        Query { message: String } =>
            "point store query failed: {message}",
        /// An association referenced an item id that does not exist. The
        /// surrounding transaction is rolled back before this is returned.
        UnknownItem { message: String } =>
            "association references an unknown item: {message}",
    }
}

/// Validated input for creating a collection point row.
///
/// The profile has already passed [`CollectPointInput::validate`]; `image`
/// is the stored relative filename produced by the image store.
#[derive(Debug, Clone)]
pub struct NewCollectPoint {
    pub input: CollectPointInput,
    pub image: String,
}

/// Filter for the collection point search operation.
///
/// `city` and `zipcode` are matched as case-sensitive substrings; empty
/// strings therefore match every point. `item_ids = None` applies no item
/// constraint, while `Some(ids)` keeps only points accepting at least one
/// of the given ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSearchFilter {
    pub city: String,
    pub zipcode: String,
    pub item_ids: Option<Vec<i32>>,
}

/// Port for reading and creating collection points.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointRepository: Send + Sync {
    /// Return every registered point with its item ids, in insertion order.
    async fn list_all(&self) -> Result<Vec<CollectPoint>, PointRepositoryError>;

    /// Return the point with the given id, or `None` when no row matches.
    async fn find_by_id(&self, id: i32) -> Result<Option<CollectPoint>, PointRepositoryError>;

    /// Return the points matching the filter, deduplicated by id.
    ///
    /// A point accepting several of the requested items appears exactly
    /// once.
    async fn search(
        &self,
        filter: PointSearchFilter,
    ) -> Result<Vec<CollectPoint>, PointRepositoryError>;

    /// Insert a point and one association row per item id in a single
    /// transaction.
    ///
    /// Either the point and all its associations commit together or
    /// nothing persists. An unknown item id aborts the whole registration
    /// and surfaces as [`PointRepositoryError::UnknownItem`].
    async fn create(
        &self,
        point: NewCollectPoint,
        item_ids: Vec<i32>,
    ) -> Result<CollectPoint, PointRepositoryError>;
}

/// Fixture implementation for tests that do not exercise point persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePointRepository;

#[async_trait]
impl PointRepository for FixturePointRepository {
    async fn list_all(&self) -> Result<Vec<CollectPoint>, PointRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<CollectPoint>, PointRepositoryError> {
        Ok(None)
    }

    async fn search(
        &self,
        _filter: PointSearchFilter,
    ) -> Result<Vec<CollectPoint>, PointRepositoryError> {
        Ok(Vec::new())
    }

    async fn create(
        &self,
        point: NewCollectPoint,
        item_ids: Vec<i32>,
    ) -> Result<CollectPoint, PointRepositoryError> {
        CollectPoint::new(CollectPointDraft {
            id: 1,
            image: point.image,
            input: point.input,
            item_ids,
        })
        .map_err(|err| PointRepositoryError::query(err.to_string()))
    }
}
