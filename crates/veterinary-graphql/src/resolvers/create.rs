//! Create mutation resolver.
//!
//! Handles `saveUser(input: UserInput!)`.

use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use tracing::{debug, warn};
use veterinary_core::User;

use super::{get_graphql_context, null_with_error, user_input_argument};
use crate::error::GraphQLError;

/// Resolver for `Mutation.saveUser`.
///
/// ```graphql
/// mutation {
///   saveUser(input: { nombre: "Ana", activo: true, rol: { id: "3" } }) {
///     id
///     nombre
///   }
/// }
/// ```
///
/// Returns the persisted user, including the id the service assigned.
pub struct SaveUserResolver;

impl SaveUserResolver {
    /// Creates a resolver for user creation.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        |ctx| {
            FieldFuture::new(async move {
                match save_user(&ctx).await {
                    Ok(saved) => Ok(Some(FieldValue::owned_any(saved))),
                    Err(err) => Ok(null_with_error(&ctx, err)),
                }
            })
        }
    }
}

async fn save_user(ctx: &ResolverContext<'_>) -> Result<User, GraphQLError> {
    debug!("Processing saveUser mutation");

    let gql_ctx = get_graphql_context(ctx)?;
    let user = user_input_argument(ctx)?.into_user()?;

    let saved = gql_ctx.service.save_user(user).await.map_err(|e| {
        warn!(error = %e, "saveUser failed");
        GraphQLError::from(e)
    })?;

    debug!(id = ?saved.id, "User saved");
    Ok(saved)
}
