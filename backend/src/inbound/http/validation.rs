//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidNumber,
    InvalidItemId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidNumber => "invalid_number",
            ErrorCode::InvalidItemId => "invalid_item_id",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }

    fn with_index(self, code: ErrorCode, index: usize, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "index": index,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_number_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a number"))
        .with_value(ErrorCode::InvalidNumber, value)
}

/// Parse a decimal form field into `f64`.
pub(crate) fn parse_f64(value: &str, field: FieldName) -> Result<f64, Error> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid_number_error(field, value))
}

fn invalid_item_id_error(field: FieldName, index: usize, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a comma-separated list of integers"))
        .with_index(ErrorCode::InvalidItemId, index, value)
}

/// Parse the `items` form/query value: comma-separated integer ids.
///
/// Every token must parse as an integer; any malformed token rejects the
/// whole request rather than being coerced or dropped.
pub(crate) fn parse_item_ids(raw: &str, field: FieldName) -> Result<Vec<i32>, Error> {
    raw.split(',')
        .enumerate()
        .map(|(index, token)| {
            token
                .trim()
                .parse::<i32>()
                .map_err(|_| invalid_item_id_error(field, index, token))
        })
        .collect()
}
