//! Veterinary GraphQL schema builder.
//!
//! This module provides `VeterinarySchemaBuilder`, which assembles the user
//! API schema with async-graphql's dynamic schema API.

use async_graphql::dynamic::{Field, InputValue, Object, Schema, SchemaBuilder, TypeRef};
use tracing::{debug, info};

use super::input_types::{USER_INPUT_TYPE, create_rol_input, create_user_input};
use super::types::{USER_TYPE, create_rol_type, create_user_type};
use crate::context::GraphQLContext;
use crate::error::GraphQLError;
use crate::resolvers::{
    DeleteUserResolver, FindAllResolver, FindUserByIdResolver, SaveUserResolver,
    UpdateUserResolver,
};

/// Configuration for the schema builder.
#[derive(Debug, Clone)]
pub struct SchemaBuilderConfig {
    /// Whether to enable introspection queries.
    pub introspection_enabled: bool,
}

impl Default for SchemaBuilderConfig {
    fn default() -> Self {
        Self {
            introspection_enabled: true,
        }
    }
}

/// Builds the GraphQL schema for the user API.
///
/// The generated schema contains:
/// - Object types `User` and `Rol`
/// - Input types `UserInput` and `RolInput`
/// - `Query { findAll, findUserById }`
/// - `Mutation { saveUser, updateUser, deleteUser }`
///
/// The [`GraphQLContext`] is registered as schema data, so every resolver
/// reaches the same service instance.
///
/// # Example
///
/// ```ignore
/// let builder = VeterinarySchemaBuilder::new(context, SchemaBuilderConfig::default());
///
/// let schema = builder.build()?;
/// ```
pub struct VeterinarySchemaBuilder {
    /// Context injected into every resolver.
    context: GraphQLContext,

    /// Configuration options.
    config: SchemaBuilderConfig,
}

impl VeterinarySchemaBuilder {
    /// Creates a new schema builder.
    #[must_use]
    pub fn new(context: GraphQLContext, config: SchemaBuilderConfig) -> Self {
        Self { context, config }
    }

    /// Builds the GraphQL schema.
    ///
    /// Building is deterministic: calling this twice yields structurally
    /// identical schemas.
    ///
    /// # Errors
    ///
    /// Returns `GraphQLError::SchemaBuildFailed` if the type system is
    /// structurally invalid.
    pub fn build(&self) -> Result<Schema, GraphQLError> {
        debug!(
            backend = self.context.backend_name(),
            "Starting GraphQL schema build"
        );

        let mut schema_builder = Schema::build("Query", Some("Mutation"), None)
            .register(create_rol_type())
            .register(create_user_type())
            .register(create_rol_input())
            .register(create_user_input())
            .register(self.build_query_type())
            .register(self.build_mutation_type())
            .data(self.context.clone());

        // Enable/disable introspection
        if !self.config.introspection_enabled {
            schema_builder = schema_builder.disable_introspection();
        }

        let schema = finish(schema_builder)?;

        info!("GraphQL schema build complete");
        Ok(schema)
    }

    /// Builds the Query root type.
    fn build_query_type(&self) -> Object {
        Object::new("Query")
            .description("Veterinary GraphQL Query root")
            .field(
                Field::new(
                    "findAll",
                    TypeRef::named_list(USER_TYPE),
                    FindAllResolver::resolve(),
                )
                .description("List every user"),
            )
            .field(
                Field::new(
                    "findUserById",
                    TypeRef::named(USER_TYPE),
                    FindUserByIdResolver::resolve(),
                )
                .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::ID)))
                .description("Read a single user by id; null when it does not exist"),
            )
    }

    /// Builds the Mutation root type.
    fn build_mutation_type(&self) -> Object {
        Object::new("Mutation")
            .description("Veterinary GraphQL Mutation root")
            .field(
                Field::new(
                    "saveUser",
                    TypeRef::named(USER_TYPE),
                    SaveUserResolver::resolve(),
                )
                .argument(InputValue::new(
                    "input",
                    TypeRef::named_nn(USER_INPUT_TYPE),
                ))
                .description("Create a user and return it with its assigned id"),
            )
            .field(
                Field::new(
                    "updateUser",
                    TypeRef::named(USER_TYPE),
                    UpdateUserResolver::resolve(),
                )
                .argument(InputValue::new(
                    "input",
                    TypeRef::named_nn(USER_INPUT_TYPE),
                ))
                .description("Update the user identified by input.id"),
            )
            .field(
                Field::new(
                    "deleteUser",
                    TypeRef::named(TypeRef::STRING),
                    DeleteUserResolver::resolve(),
                )
                .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::ID)))
                .description("Delete a user and return a confirmation message"),
            )
    }
}

/// Finishes a dynamic schema, mapping structural errors to `SchemaBuildFailed`.
fn finish(schema_builder: SchemaBuilder) -> Result<Schema, GraphQLError> {
    schema_builder
        .finish()
        .map_err(|e| GraphQLError::SchemaBuildFailed(e.to_string()))
}
