//! Read resolvers.
//!
//! Implements `findAll` and `findUserById(id)`.

use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use tracing::{debug, warn};
use veterinary_core::User;

use super::{get_graphql_context, id_argument, null_with_error};
use crate::error::GraphQLError;

/// Resolver for `Query.findAll`.
pub struct FindAllResolver;

impl FindAllResolver {
    /// Creates a resolver returning every user in service order.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        |ctx| {
            FieldFuture::new(async move {
                match find_all(&ctx).await {
                    Ok(users) => Ok(Some(FieldValue::list(
                        users.into_iter().map(FieldValue::owned_any),
                    ))),
                    Err(err) => Ok(null_with_error(&ctx, err)),
                }
            })
        }
    }
}

async fn find_all(ctx: &ResolverContext<'_>) -> Result<Vec<User>, GraphQLError> {
    let gql_ctx = get_graphql_context(ctx)?;

    let users = gql_ctx.service.find_all().await.map_err(|e| {
        warn!(error = %e, "Service error listing users");
        GraphQLError::from(e)
    })?;

    debug!(count = users.len(), "Resolved findAll");
    Ok(users)
}

/// Resolver for `Query.findUserById(id: ID!)`.
pub struct FindUserByIdResolver;

impl FindUserByIdResolver {
    /// Creates a resolver reading a single user by id.
    ///
    /// A missing user resolves to `null` without an error.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        |ctx| {
            FieldFuture::new(async move {
                match find_user_by_id(&ctx).await {
                    Ok(user) => Ok(user.map(FieldValue::owned_any)),
                    Err(err) => Ok(null_with_error(&ctx, err)),
                }
            })
        }
    }
}

async fn find_user_by_id(ctx: &ResolverContext<'_>) -> Result<Option<User>, GraphQLError> {
    let id = id_argument(ctx, "id")?;

    debug!(id, "Resolving findUserById");

    let gql_ctx = get_graphql_context(ctx)?;

    let user = gql_ctx.service.find_user_by_id(id).await.map_err(|e| {
        warn!(error = %e, id, "Service error reading user");
        GraphQLError::from(e)
    })?;

    if user.is_none() {
        debug!(id, "User not found");
    }

    Ok(user)
}
