pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;

pub use config::{AppConfig, BootstrapConfig, LoggingConfig, ServerConfig};
pub use observability::{apply_logging_level, init_tracing, init_tracing_with_level};
pub use server::{ServerBuilder, VeterinaryServer, build_app, build_graphql_state};
