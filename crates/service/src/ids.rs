//! Identifier parsing at the request boundary.
//!
//! Clients send identifiers as text; a malformed one is a client error,
//! never a lookup miss.

use crate::errors::ServiceError;

/// Parse a text identifier into the numeric key used by the stores.
///
/// # Examples
/// ```
/// assert_eq!(service::ids::parse_id("42").unwrap(), 42);
/// assert!(service::ids::parse_id("abc").is_err());
/// ```
pub fn parse_id(raw: &str) -> Result<i64, ServiceError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| ServiceError::Parse(format!("'{}' is not a valid integer id ({})", raw, e)))
}
