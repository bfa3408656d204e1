//! # veterinary-storage
//!
//! Service boundary for the veterinary user API.
//!
//! This crate defines the [`UserService`] trait consumed by the GraphQL layer
//! and the [`ServiceError`] it reports. It does not contain any
//! implementations; see `veterinary-db-memory` for the in-memory backend.
//!
//! ## Example
//!
//! ```ignore
//! use veterinary_storage::{ServiceError, UserService};
//!
//! async fn active_users(service: &dyn UserService) -> Result<usize, ServiceError> {
//!     let users = service.find_all().await?;
//!     Ok(users.iter().filter(|u| u.activo == Some(true)).count())
//! }
//! ```

mod error;
mod traits;

pub use error::{ErrorCategory, ServiceError};
pub use traits::UserService;

/// Type alias for a shared service trait object.
pub type DynUserService = std::sync::Arc<dyn UserService>;
