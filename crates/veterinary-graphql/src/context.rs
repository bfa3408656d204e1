//! GraphQL execution context.
//!
//! This module provides the context struct that holds the dependencies needed
//! by GraphQL resolvers. The context is constructed once at startup and
//! registered as schema data, so every request shares the same service handle.
//!
//! # Example
//!
//! ```ignore
//! use veterinary_graphql::GraphQLContextBuilder;
//!
//! let context = GraphQLContextBuilder::new()
//!     .with_service(service.clone())
//!     .build()?;
//! ```

use veterinary_storage::DynUserService;

/// GraphQL execution context.
///
/// Holds the user service collaborator. The context is `Clone` and
/// `Send + Sync`; the service is shared through an `Arc`.
#[derive(Clone)]
pub struct GraphQLContext {
    /// User service the resolvers delegate to.
    pub service: DynUserService,
}

impl GraphQLContext {
    /// Returns the name of the backing service implementation.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.service.backend_name()
    }

    /// Creates a new builder for GraphQLContext.
    #[must_use]
    pub fn builder() -> GraphQLContextBuilder {
        GraphQLContextBuilder::default()
    }
}

/// Builder for constructing GraphQLContext.
///
/// This builder validates that all required fields are provided before
/// creating the context.
#[derive(Default)]
pub struct GraphQLContextBuilder {
    service: Option<DynUserService>,
}

impl GraphQLContextBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user service.
    #[must_use]
    pub fn with_service(mut self, service: DynUserService) -> Self {
        self.service = Some(service);
        self
    }

    /// Builds the GraphQLContext.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<GraphQLContext, ContextBuilderError> {
        let service = self
            .service
            .ok_or(ContextBuilderError::MissingField("service"))?;

        Ok(GraphQLContext { service })
    }
}

/// Errors that can occur when building a GraphQLContext.
#[derive(Debug, thiserror::Error)]
pub enum ContextBuilderError {
    /// A required field was not provided.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
