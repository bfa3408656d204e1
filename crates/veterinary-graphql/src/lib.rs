//! # veterinary-graphql
//!
//! GraphQL API layer for the veterinary user service.
//!
//! This crate exposes the `User` entity (with its nested `Rol`) through a
//! GraphQL schema built with async-graphql's dynamic schema API:
//!
//! - `Query.findAll` and `Query.findUserById(id)` for reads
//! - `Mutation.saveUser(input)`, `Mutation.updateUser(input)` and
//!   `Mutation.deleteUser(id)` for writes
//!
//! ## Overview
//!
//! The schema is built exactly once at startup by [`VeterinarySchemaBuilder`]
//! and shared read-only by every request. Resolvers reach the
//! [`UserService`](veterinary_storage::UserService) through the
//! [`GraphQLContext`] registered as schema data.
//!
//! ## Endpoints
//!
//! - `POST /graphql` - GraphQL endpoint (path configurable)
//!
//! ## Configuration
//!
//! ```toml
//! [graphql]
//! path = "/graphql"
//! introspection = true
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration options
//! - [`schema`] - Schema building
//! - [`resolvers`] - Root field resolvers
//! - [`input`] - Mutation input mapping
//! - [`context`] - GraphQL execution context
//! - [`handler`] - Execution entry point and axum handler
//! - [`error`] - Error types for GraphQL operations

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod input;
pub mod resolvers;
pub mod schema;

// Re-export main types
pub use config::GraphQLConfig;
pub use context::{GraphQLContext, GraphQLContextBuilder};
pub use error::GraphQLError;
pub use handler::{GraphQLRequest, GraphQLResponse, GraphQLState, execute, graphql_handler};
pub use input::{RolInput, UserInput};
pub use schema::{SchemaBuilderConfig, VeterinarySchemaBuilder};
