//! Diesel queryable and insertable rows for the persistence adapters.

use diesel::prelude::*;

use super::schema::{collect_point_items, collect_points, items};

/// Queryable row for recyclable item categories.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub id: i32,
    pub title: String,
    pub image: String,
}

/// Queryable row for collection points.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = collect_points)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CollectPointRow {
    pub id: i32,
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub zipcode: String,
}

/// Insertable row for a new collection point.
#[derive(Debug, Insertable)]
#[diesel(table_name = collect_points)]
pub(crate) struct NewCollectPointRow<'a> {
    pub image: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub whatsapp: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub city: &'a str,
    pub zipcode: &'a str,
}

/// Insertable row associating a point with one accepted item.
#[derive(Debug, Insertable)]
#[diesel(table_name = collect_point_items)]
pub(crate) struct NewPointItemRow {
    pub collect_point_id: i32,
    pub item_id: i32,
}

/// Queryable row for point-item associations.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = collect_point_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PointItemRow {
    pub collect_point_id: i32,
    pub item_id: i32,
}
