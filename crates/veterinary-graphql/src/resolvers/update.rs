//! Update mutation resolver.
//!
//! Handles `updateUser(input: UserInput!)`.

use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use tracing::{debug, warn};
use veterinary_core::User;

use super::{get_graphql_context, null_with_error, user_input_argument};
use crate::error::GraphQLError;

/// Resolver for `Mutation.updateUser`.
///
/// The input must carry the `id` of the user to replace; an input without
/// one is rejected rather than treated as a create. Fields left out of the
/// input are stored as absent.
pub struct UpdateUserResolver;

impl UpdateUserResolver {
    /// Creates a resolver for user updates.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        |ctx| {
            FieldFuture::new(async move {
                match update_user(&ctx).await {
                    Ok(updated) => Ok(Some(FieldValue::owned_any(updated))),
                    Err(err) => Ok(null_with_error(&ctx, err)),
                }
            })
        }
    }
}

async fn update_user(ctx: &ResolverContext<'_>) -> Result<User, GraphQLError> {
    debug!("Processing updateUser mutation");

    let gql_ctx = get_graphql_context(ctx)?;

    let input = user_input_argument(ctx)?;
    if !input.has_id() {
        return Err(GraphQLError::InvalidArgument(
            "updateUser requires input.id".into(),
        ));
    }
    let user = input.into_user()?;

    let updated = gql_ctx.service.update_user(user).await.map_err(|e| {
        warn!(error = %e, "updateUser failed");
        GraphQLError::from(e)
    })?;

    debug!(id = ?updated.id, "User updated");
    Ok(updated)
}
