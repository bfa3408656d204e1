//! In-memory user service backend for the veterinary API.
//!
//! This crate provides an in-memory implementation of the `UserService` trait
//! from `veterinary-storage`, using papaya lock-free HashMaps for concurrent access.
//!
//! # Example
//!
//! ```ignore
//! use veterinary_core::{Rol, User};
//! use veterinary_db_memory::InMemoryUserService;
//! use veterinary_storage::UserService;
//!
//! let service = InMemoryUserService::with_roles([Rol::new(1, "ADMIN", "Administrador")]);
//!
//! let user = User { nombre: Some("Ana".into()), ..User::default() };
//! let saved = service.save_user(user).await?;
//! assert!(saved.id.is_some());
//! ```

mod service_impl;
pub mod storage;

// Re-export the UserService trait for convenience
pub use veterinary_storage::{ServiceError, UserService};

pub use storage::InMemoryUserService;

/// Creates a new in-memory UserService instance with the given role catalogue.
pub fn create_user_service(
    roles: impl IntoIterator<Item = veterinary_core::Rol>,
) -> veterinary_storage::DynUserService {
    std::sync::Arc::new(InMemoryUserService::with_roles(roles))
}
