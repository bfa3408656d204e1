pub mod error;
pub mod id;
pub mod user;

pub use error::CoreError;
pub use id::{parse_id, UserId};
pub use user::{Rol, User};
