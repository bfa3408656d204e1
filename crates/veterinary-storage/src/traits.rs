//! Service traits for the user service boundary.

use async_trait::async_trait;
use veterinary_core::{User, UserId};

use crate::error::ServiceError;

/// Operations the GraphQL layer needs from the user store.
///
/// Implementations must be thread-safe (`Send + Sync`); a single instance is
/// shared by every request.
///
/// # Example
///
/// ```ignore
/// use veterinary_storage::{ServiceError, UserService};
///
/// async fn require_user(service: &dyn UserService, id: i64) -> Result<User, ServiceError> {
///     service
///         .find_user_by_id(id)
///         .await?
///         .ok_or_else(|| ServiceError::not_found("User", id))
/// }
/// ```
#[async_trait]
pub trait UserService: Send + Sync {
    /// Returns every user, in the order the backend defines.
    async fn find_all(&self) -> Result<Vec<User>, ServiceError>;

    /// Reads a user by id.
    ///
    /// Returns `None` if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues, not for missing users.
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, ServiceError>;

    /// Persists a new user and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidReference` if the referenced role is unknown.
    async fn save_user(&self, user: User) -> Result<User, ServiceError>;

    /// Replaces the stored user identified by `user.id`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidUser` if `user.id` is missing.
    /// Returns `ServiceError::NotFound` if no user has that id.
    async fn update_user(&self, user: User) -> Result<User, ServiceError>;

    /// Deletes a user by id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the user does not exist.
    async fn delete_user(&self, id: UserId) -> Result<(), ServiceError>;

    /// Returns the name of this backend (e.g., "memory").
    fn backend_name(&self) -> &'static str;
}
