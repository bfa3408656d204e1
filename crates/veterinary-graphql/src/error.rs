//! Error types for GraphQL operations.
//!
//! This module defines the error types used throughout the GraphQL layer.
//! Request-level errors are converted to HTTP responses by the handler;
//! everything raised inside a resolver becomes a field-level GraphQL error
//! carrying an `extensions.code`.

use std::fmt;

use async_graphql::ErrorExtensions;
use veterinary_core::CoreError;
use veterinary_storage::ServiceError;

/// Errors that can occur during GraphQL operations.
#[derive(Debug)]
pub enum GraphQLError {
    /// Schema build failed.
    SchemaBuildFailed(String),

    /// The HTTP request body is not a valid GraphQL request.
    InvalidRequest(String),

    /// A field argument could not be interpreted (e.g. a non-numeric id).
    InvalidArgument(String),

    /// Entity not found.
    NotFound {
        /// Entity kind.
        entity: String,
        /// Entity id.
        id: String,
    },

    /// The user service rejected or failed the operation.
    Service {
        /// Error category reported by the service.
        category: String,
        /// Service error message.
        message: String,
    },

    /// Internal server error.
    Internal(String),
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaBuildFailed(msg) => {
                write!(f, "Failed to build GraphQL schema: {msg}")
            }
            Self::InvalidRequest(msg) => {
                write!(f, "Invalid GraphQL request: {msg}")
            }
            Self::InvalidArgument(msg) => {
                write!(f, "Invalid argument: {msg}")
            }
            Self::NotFound { entity, id } => {
                write!(f, "{entity} {id} not found")
            }
            Self::Service { message, .. } => {
                write!(f, "Service error: {message}")
            }
            Self::Internal(msg) => {
                write!(f, "Internal error: {msg}")
            }
        }
    }
}

impl std::error::Error for GraphQLError {}

impl GraphQLError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::SchemaBuildFailed(_) => 500,
            Self::InvalidRequest(_) | Self::InvalidArgument(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Service { .. } => 500,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for GraphQL error extensions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SchemaBuildFailed(_) => "SCHEMA_BUILD_FAILED",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Service { .. } => "SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Converts this error into a field-level GraphQL error.
    ///
    /// The message is the error's display text; `extensions.code` carries
    /// [`error_code`](Self::error_code) and service failures additionally
    /// carry `extensions.category`.
    #[must_use]
    pub fn into_field_error(self) -> async_graphql::Error {
        let code = self.error_code();
        let category = match &self {
            Self::Service { category, .. } => Some(category.clone()),
            Self::NotFound { .. } => Some("not_found".to_string()),
            _ => None,
        };

        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", code);
            if let Some(category) = category {
                e.set("category", category);
            }
        })
    }

    /// Builds the JSON error envelope returned for request-level failures.
    #[must_use]
    pub fn to_response_body(&self) -> serde_json::Value {
        serde_json::json!({
            "data": null,
            "errors": [{
                "message": self.to_string(),
                "extensions": {
                    "code": self.error_code()
                }
            }]
        })
    }
}

impl From<ServiceError> for GraphQLError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { entity, id } => Self::NotFound { entity, id },
            other => Self::Service {
                category: other.category().to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl From<CoreError> for GraphQLError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidId(_) => Self::InvalidArgument(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GraphQLError::InvalidRequest("test".into()).status_code(), 400);
        assert_eq!(GraphQLError::InvalidArgument("test".into()).status_code(), 400);
        assert_eq!(
            GraphQLError::NotFound {
                entity: "User".into(),
                id: "123".into()
            }
            .status_code(),
            404
        );
        assert_eq!(GraphQLError::SchemaBuildFailed("x".into()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            GraphQLError::InvalidArgument("test".into()).error_code(),
            "INVALID_ARGUMENT"
        );
        assert_eq!(
            GraphQLError::Internal("test".into()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_from_service_error() {
        let err = GraphQLError::from(ServiceError::not_found("User", 5));
        assert!(matches!(err, GraphQLError::NotFound { ref id, .. } if id == "5"));

        let err = GraphQLError::from(ServiceError::invalid_reference("Rol", 3));
        assert_eq!(err.error_code(), "SERVICE_ERROR");
        assert!(err.to_string().contains("Rol 3"));
    }

    #[test]
    fn test_from_core_error() {
        let err = GraphQLError::from(CoreError::invalid_id("abc"));
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_into_field_error_sets_code() {
        let err = GraphQLError::InvalidArgument("bad id".into()).into_field_error();
        assert_eq!(err.message, "Invalid argument: bad id");

        let extensions = serde_json::to_value(err.extensions.as_ref().unwrap()).unwrap();
        assert_eq!(extensions["code"], "INVALID_ARGUMENT");
    }

    #[test]
    fn test_response_body() {
        let body = GraphQLError::InvalidRequest("missing query".into()).to_response_body();
        assert!(body["data"].is_null());
        assert_eq!(body["errors"][0]["extensions"]["code"], "INVALID_REQUEST");
    }
}
