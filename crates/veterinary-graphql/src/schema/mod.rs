//! GraphQL schema building.
//!
//! This module provides the infrastructure for building the GraphQL schema.
//! The schema is assembled with async-graphql's dynamic API once at startup
//! and shared read-only afterwards.
//!
//! ## Components
//!
//! - [`VeterinarySchemaBuilder`] - Builds the complete schema
//! - [`types`] - `User` and `Rol` object types
//! - [`input_types`] - `UserInput` and `RolInput` input types

mod builder;
pub mod input_types;
pub mod types;

pub use builder::{SchemaBuilderConfig, VeterinarySchemaBuilder};
