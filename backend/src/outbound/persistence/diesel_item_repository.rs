//! PostgreSQL-backed item catalog read adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::Item;

use super::diesel_helpers::{map_basic_diesel_error, map_basic_pool_error};
use super::models::ItemRow;
use super::pool::{DbPool, PoolError};
use super::schema::items;

/// Diesel-backed implementation of the item catalog port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ItemRepositoryError {
    map_basic_pool_error(error, ItemRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ItemRepositoryError {
    map_basic_diesel_error(
        error,
        ItemRepositoryError::query,
        ItemRepositoryError::connection,
    )
}

fn row_to_item(row: ItemRow) -> Result<Item, ItemRepositoryError> {
    Item::new(row.id, row.title, row.image).map_err(|err| ItemRepositoryError::query(err.to_string()))
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn list_items(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ItemRow> = items::table
            .select(ItemRow::as_select())
            .order_by(items::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_item).collect()
    }
}
