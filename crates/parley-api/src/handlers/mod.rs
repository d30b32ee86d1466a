//! Request handlers, one module per resource

pub mod chats;
pub mod health;
pub mod messages;
pub mod users;

use crate::response::ApiError;

/// Parse a wire-format string id into a numeric id.
///
/// Identifier fields arrive as JSON strings; an unparsable value is a client
/// error naming the field.
pub(crate) fn parse_id(raw: &str, field: &'static str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_id(field))
}

/// Parse a list of wire-format string ids
pub(crate) fn parse_ids(raw: &[String], field: &'static str) -> Result<Vec<i64>, ApiError> {
    raw.iter().map(|s| parse_id(s, field)).collect()
}
