//! Shared helpers for the Diesel repository implementations.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    connection(error.into_message())
}

/// Map common Diesel error variants into query/connection constructors.
///
/// Captures the mapping repeated across repositories where query-builder
/// failures and generic database errors are query errors and only a closed
/// connection is a connection error.
pub(crate) fn map_basic_diesel_error<E, Q, C>(
    error: diesel::result::Error,
    query: Q,
    connection: C,
) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => query("database error"),
        _ => query("database error"),
    }
}

/// Escape `%`, `_`, and the escape character itself for a `LIKE` pattern.
///
/// The caller wraps the result in `%...%` and must pass `\` as the pattern
/// escape character.
pub(crate) fn escape_like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Substring `LIKE` pattern for a user-supplied filter value.
pub(crate) fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like_pattern(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Porto", "%Porto%")]
    #[case("100%", "%100\\%%")]
    #[case("a_b", "%a\\_b%")]
    #[case("c\\d", "%c\\\\d%")]
    fn wildcards_are_escaped(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(contains_pattern(value), expected);
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped: String =
            map_basic_pool_error(PoolError::checkout("timed out"), |message| message);
        assert_eq!(mapped, "timed out");
    }

    #[rstest]
    fn not_found_maps_to_a_query_error() {
        let mapped: &str = map_basic_diesel_error(
            diesel::result::Error::NotFound,
            |m| m,
            |_| "connection",
        );
        assert_eq!(mapped, "record not found");
    }
}
