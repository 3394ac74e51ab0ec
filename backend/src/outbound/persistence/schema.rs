//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel
//! uses them for compile-time query validation and SQL generation.

diesel::table! {
    /// Recyclable item categories.
    items (id) {
        id -> Int4,
        /// Human-readable category title.
        title -> Varchar,
        /// Icon filename under the public assets directory.
        image -> Varchar,
    }
}

diesel::table! {
    /// Registered collection points.
    ///
    /// The database-managed `created_at` audit column is deliberately not
    /// mapped; the application never reads or writes it.
    collect_points (id) {
        id -> Int4,
        /// Stored photo filename under the public assets directory.
        image -> Varchar,
        name -> Varchar,
        email -> Varchar,
        whatsapp -> Varchar,
        latitude -> Float8,
        longitude -> Float8,
        city -> Varchar,
        zipcode -> Varchar,
    }
}

diesel::table! {
    /// Join table associating points with the items they accept.
    ///
    /// `(collect_point_id, item_id)` carries a uniqueness constraint so an
    /// association cannot be recorded twice.
    collect_point_items (id) {
        id -> Int4,
        collect_point_id -> Int4,
        item_id -> Int4,
    }
}

diesel::joinable!(collect_point_items -> collect_points (collect_point_id));
diesel::joinable!(collect_point_items -> items (item_id));

diesel::allow_tables_to_appear_in_same_query!(items, collect_points, collect_point_items);
