// Numeric identifiers shared by users and roles.
use crate::error::CoreError;

pub type UserId = i64;

/// Parses the textual form of a GraphQL `ID` into a numeric identifier.
///
/// Surrounding whitespace is ignored; anything else that is not a base-10
/// integer is rejected.
pub fn parse_id(raw: &str) -> Result<UserId, CoreError> {
    raw.trim()
        .parse::<UserId>()
        .map_err(|_| CoreError::invalid_id(raw))
}
