//! Error types for the user service boundary.

use std::fmt;

/// Errors that can occur during service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The requested entity was not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity that was not found.
        entity: String,
        /// The id that was looked up.
        id: String,
    },

    /// The user references an entity that does not exist (e.g. an unknown role).
    #[error("Invalid reference: {entity} {id} does not exist")]
    InvalidReference {
        /// The kind of entity referenced.
        entity: String,
        /// The referenced id.
        id: String,
    },

    /// The user data is invalid for the requested operation.
    #[error("Invalid user: {message}")]
    InvalidUser {
        /// Description of why the user is invalid.
        message: String,
    },

    /// An internal service error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl ServiceError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a new `InvalidReference` error.
    #[must_use]
    pub fn invalid_reference(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::InvalidReference {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a new `InvalidUser` error.
    #[must_use]
    pub fn invalid_user(message: impl Into<String>) -> Self {
        Self::InvalidUser {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the error category for logging and error codes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidReference { .. } | Self::InvalidUser { .. } => ErrorCategory::Validation,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Categories of service errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Entity not found.
    NotFound,
    /// Validation error.
    Validation,
    /// Internal error.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Validation => write!(f, "validation"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServiceError::not_found("User", 123);
        assert_eq!(err.to_string(), "User not found: 123");

        let err = ServiceError::invalid_reference("Rol", 9);
        assert_eq!(err.to_string(), "Invalid reference: Rol 9 does not exist");

        let err = ServiceError::invalid_user("missing id");
        assert_eq!(err.to_string(), "Invalid user: missing id");
    }

    #[test]
    fn test_error_predicates() {
        assert!(ServiceError::not_found("User", 1).is_not_found());
        assert!(!ServiceError::internal("boom").is_not_found());
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            ServiceError::not_found("User", 1).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            ServiceError::invalid_reference("Rol", 3).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ServiceError::internal("boom").category(),
            ErrorCategory::Internal
        );
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
    }
}
