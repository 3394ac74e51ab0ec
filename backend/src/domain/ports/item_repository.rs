//! Read-side port for the recyclable item catalog.

use async_trait::async_trait;

use crate::domain::Item;

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading the item catalog.
    pub enum ItemRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "item read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "item read query failed: {message}",
    }
}

/// Port for listing the recyclable item catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Return every item in catalog order (by id).
    ///
    /// An empty catalog yields an empty vector rather than an error.
    async fn list_items(&self) -> Result<Vec<Item>, ItemRepositoryError>;
}

/// Fixture implementation serving a small canned catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureItemRepository;

#[async_trait]
impl ItemRepository for FixtureItemRepository {
    async fn list_items(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        let items = [
            (1, "Lâmpadas", "lampadas.svg"),
            (2, "Pilhas e Baterias", "baterias.svg"),
        ]
        .into_iter()
        .map(|(id, title, image)| {
            Item::new(id, title, image)
                .map_err(|err| ItemRepositoryError::query(err.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_serves_canned_catalog() {
        let repo = FixtureItemRepository;
        let items = repo.list_items().await.expect("fixture list succeeds");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title(), "Lâmpadas");
    }
}
