//! Delete mutation resolver.
//!
//! Handles `deleteUser(id: ID!)`.

use async_graphql::Value;
use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use tracing::{debug, trace, warn};

use super::{get_graphql_context, id_argument, null_with_error};
use crate::error::GraphQLError;

/// Resolver for `Mutation.deleteUser`.
///
/// Returns a confirmation message naming the deleted id.
pub struct DeleteUserResolver;

impl DeleteUserResolver {
    /// Creates a resolver for user deletion.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        |ctx| {
            FieldFuture::new(async move {
                match delete_user(&ctx).await {
                    Ok(message) => Ok(Some(FieldValue::value(Value::String(message)))),
                    Err(err) => Ok(null_with_error(&ctx, err)),
                }
            })
        }
    }
}

async fn delete_user(ctx: &ResolverContext<'_>) -> Result<String, GraphQLError> {
    debug!("Processing deleteUser mutation");

    let gql_ctx = get_graphql_context(ctx)?;
    let id = id_argument(ctx, "id")?;

    trace!(id, "Deleting user via service");

    gql_ctx.service.delete_user(id).await.map_err(|e| {
        warn!(error = %e, id, "deleteUser failed");
        GraphQLError::from(e)
    })?;

    debug!(id, "User deleted");
    Ok(deleted_message(id))
}

fn deleted_message(id: i64) -> String {
    format!("User {id} deleted")
}
