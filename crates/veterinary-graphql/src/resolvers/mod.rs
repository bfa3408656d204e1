//! GraphQL resolvers for the user API.
//!
//! One resolver type per root field:
//! - `read`: `findAll` and `findUserById(id)`
//! - `create`: `saveUser(input)`
//! - `update`: `updateUser(input)`
//! - `delete`: `deleteUser(id)`

mod create;
mod delete;
mod read;
mod update;

pub use create::SaveUserResolver;
pub use delete::DeleteUserResolver;
pub use read::{FindAllResolver, FindUserByIdResolver};
pub use update::UpdateUserResolver;

use async_graphql::dynamic::{FieldValue, ResolverContext};
use veterinary_core::{UserId, parse_id};

use crate::context::GraphQLContext;
use crate::error::GraphQLError;
use crate::input::UserInput;

/// Helper to extract GraphQL context from resolver context.
pub(crate) fn get_graphql_context<'a>(
    ctx: &'a ResolverContext<'_>,
) -> Result<&'a GraphQLContext, GraphQLError> {
    ctx.data::<GraphQLContext>()
        .map_err(|_| GraphQLError::Internal("GraphQL context not available".into()))
}

/// Records `err` against the current field and resolves the field to `null`.
///
/// The error carries the field's location and response path; sibling fields
/// keep their data.
pub(crate) fn null_with_error<'a>(
    ctx: &ResolverContext<'_>,
    err: GraphQLError,
) -> Option<FieldValue<'a>> {
    let server_error = err.into_field_error().into_server_error(ctx.ctx.item.pos);
    ctx.ctx.add_error(ctx.ctx.set_error_path(server_error));
    None
}

/// Reads an `ID` argument and parses it to a numeric user id.
///
/// Both string and integer literals are accepted.
pub(crate) fn id_argument(ctx: &ResolverContext<'_>, name: &str) -> Result<UserId, GraphQLError> {
    let value = ctx
        .args
        .get(name)
        .ok_or_else(|| GraphQLError::InvalidArgument(format!("missing required argument '{name}'")))?;

    if let Ok(raw) = value.string() {
        return Ok(parse_id(raw)?);
    }

    value
        .i64()
        .map_err(|_| GraphQLError::InvalidArgument(format!("argument '{name}' is not an ID")))
}

/// Reads the `input` argument of a mutation as a typed [`UserInput`].
pub(crate) fn user_input_argument(ctx: &ResolverContext<'_>) -> Result<UserInput, GraphQLError> {
    let value = ctx
        .args
        .get("input")
        .ok_or_else(|| GraphQLError::InvalidArgument("missing required argument 'input'".into()))?;

    async_graphql::from_value::<UserInput>(value.as_value().clone())
        .map_err(|e| GraphQLError::InvalidArgument(format!("invalid UserInput: {e}")))
}
