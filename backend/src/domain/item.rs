//! Recyclable item categories.
//!
//! Items are read-only reference data seeded by migration. The application
//! never mutates them at runtime; collection points reference them through
//! the association table.

use serde::{Deserialize, Serialize};

/// A category of recyclable material accepted at collection points.
///
/// ## Invariants
/// - `title` and `image` are non-empty once trimmed.
/// - `image` is a relative filename; adapters resolve it against the
///   configured asset base URL before returning it to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: i32,
    title: String,
    image: String,
}

/// Validation errors emitted by the [`Item`] constructor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemValidationError {
    #[error("item title must not be empty")]
    EmptyTitle,
    #[error("item image reference must not be empty")]
    EmptyImage,
}

impl Item {
    /// Validated constructor.
    pub fn new(
        id: i32,
        title: impl Into<String>,
        image: impl Into<String>,
    ) -> Result<Self, ItemValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }
        let image = image.into();
        if image.trim().is_empty() {
            return Err(ItemValidationError::EmptyImage);
        }
        Ok(Self { id, title, image })
    }

    /// Stable item identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Human-readable category title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Relative icon filename.
    pub fn image(&self) -> &str {
        &self.image
    }
}
