//! PostgreSQL-backed collection point adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::AsyncConnection as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{
    NewCollectPoint, PointRepository, PointRepositoryError, PointSearchFilter,
};
use crate::domain::{CollectPoint, CollectPointDraft, CollectPointInput};

use super::diesel_helpers::{contains_pattern, map_basic_diesel_error, map_basic_pool_error};
use super::models::{CollectPointRow, NewCollectPointRow, NewPointItemRow, PointItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::{collect_point_items, collect_points};

/// Diesel-backed implementation of the collection point port.
#[derive(Clone)]
pub struct DieselPointRepository {
    pool: DbPool,
}

impl DieselPointRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PointRepositoryError {
    map_basic_pool_error(error, PointRepositoryError::connection)
}

fn map_read_error(error: diesel::result::Error) -> PointRepositoryError {
    map_basic_diesel_error(
        error,
        PointRepositoryError::query,
        PointRepositoryError::connection,
    )
}

/// Map write-path errors, surfacing item foreign-key violations as
/// [`PointRepositoryError::UnknownItem`] so registration can reject the
/// request instead of reporting a server fault.
fn map_write_error(error: diesel::result::Error) -> PointRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) = &error {
        let references_item = info
            .constraint_name()
            .map(|name| name.contains("item"))
            .unwrap_or_else(|| info.message().contains("item"));
        if references_item {
            return PointRepositoryError::unknown_item(info.message().to_owned());
        }
    }
    map_read_error(error)
}

fn row_to_point(
    row: CollectPointRow,
    item_ids: Vec<i32>,
) -> Result<CollectPoint, PointRepositoryError> {
    CollectPoint::new(CollectPointDraft {
        id: row.id,
        image: row.image,
        input: CollectPointInput {
            name: row.name,
            email: row.email,
            whatsapp: row.whatsapp,
            latitude: row.latitude,
            longitude: row.longitude,
            city: row.city,
            zipcode: row.zipcode,
        },
        item_ids,
    })
    .map_err(|err| PointRepositoryError::query(err.to_string()))
}

/// Load the item ids accepted by each of the given points, keyed by point id.
async fn load_associations(
    conn: &mut AsyncPgConnection,
    point_ids: &[i32],
) -> Result<HashMap<i32, Vec<i32>>, diesel::result::Error> {
    let rows: Vec<PointItemRow> = collect_point_items::table
        .filter(collect_point_items::collect_point_id.eq_any(point_ids))
        .select(PointItemRow::as_select())
        .order_by((
            collect_point_items::collect_point_id,
            collect_point_items::item_id,
        ))
        .load(conn)
        .await?;

    let mut grouped: HashMap<i32, Vec<i32>> = HashMap::new();
    for row in rows {
        grouped.entry(row.collect_point_id).or_default().push(row.item_id);
    }
    Ok(grouped)
}

fn assemble_points(
    rows: Vec<CollectPointRow>,
    mut associations: HashMap<i32, Vec<i32>>,
) -> Result<Vec<CollectPoint>, PointRepositoryError> {
    rows.into_iter()
        .map(|row| {
            let item_ids = associations.remove(&row.id).unwrap_or_default();
            row_to_point(row, item_ids)
        })
        .collect()
}

impl DieselPointRepository {
    async fn load_points(
        &self,
        rows_query: impl FnOnce(
            collect_points::BoxedQuery<'static, diesel::pg::Pg>,
        ) -> collect_points::BoxedQuery<'static, diesel::pg::Pg>,
    ) -> Result<Vec<CollectPoint>, PointRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let query = rows_query(collect_points::table.into_boxed());
        let rows: Vec<CollectPointRow> = query
            .select(CollectPointRow::as_select())
            .order_by(collect_points::id)
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        let point_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let associations = load_associations(&mut conn, &point_ids)
            .await
            .map_err(map_read_error)?;

        assemble_points(rows, associations)
    }
}

#[async_trait]
impl PointRepository for DieselPointRepository {
    async fn list_all(&self) -> Result<Vec<CollectPoint>, PointRepositoryError> {
        self.load_points(|query| query).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CollectPoint>, PointRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CollectPointRow> = collect_points::table
            .filter(collect_points::id.eq(id))
            .select(CollectPointRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let associations = load_associations(&mut conn, &[row.id])
            .await
            .map_err(map_read_error)?;
        assemble_points(vec![row], associations).map(|mut points| points.pop())
    }

    async fn search(
        &self,
        filter: PointSearchFilter,
    ) -> Result<Vec<CollectPoint>, PointRepositoryError> {
        let PointSearchFilter {
            city,
            zipcode,
            item_ids,
        } = filter;
        let city_pattern = contains_pattern(&city);
        let zipcode_pattern = contains_pattern(&zipcode);

        self.load_points(move |mut query| {
            query = query
                .filter(collect_points::city.like(city_pattern))
                .filter(collect_points::zipcode.like(zipcode_pattern));
            if let Some(ids) = item_ids {
                // Membership via a subselect keeps results deduplicated:
                // a point accepting several requested items matches once.
                let accepting = collect_point_items::table
                    .filter(collect_point_items::item_id.eq_any(ids))
                    .select(collect_point_items::collect_point_id);
                query = query.filter(collect_points::id.eq_any(accepting));
            }
            query
        })
        .await
    }

    async fn create(
        &self,
        point: NewCollectPoint,
        item_ids: Vec<i32>,
    ) -> Result<CollectPoint, PointRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewCollectPointRow {
            image: &point.image,
            name: &point.input.name,
            email: &point.input.email,
            whatsapp: &point.input.whatsapp,
            latitude: point.input.latitude,
            longitude: point.input.longitude,
            city: &point.input.city,
            zipcode: &point.input.zipcode,
        };
        let association_ids = item_ids.clone();

        let row: CollectPointRow = conn
            .transaction(|conn| {
                async move {
                    let row: CollectPointRow = diesel::insert_into(collect_points::table)
                        .values(&new_row)
                        .returning(CollectPointRow::as_returning())
                        .get_result(conn)
                        .await?;

                    let associations: Vec<NewPointItemRow> = association_ids
                        .iter()
                        .map(|&item_id| NewPointItemRow {
                            collect_point_id: row.id,
                            item_id,
                        })
                        .collect();
                    diesel::insert_into(collect_point_items::table)
                        .values(&associations)
                        .execute(conn)
                        .await?;

                    Ok(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_write_error)?;

        row_to_point(row, item_ids)
    }
}
