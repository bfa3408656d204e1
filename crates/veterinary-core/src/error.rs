use thiserror::Error;

/// Core error types for veterinary domain operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid ID: '{0}' is not a numeric identifier")]
    InvalidId(String),
}

impl CoreError {
    /// Create a new InvalidId error
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId(id.into())
    }
}
