//! GraphQL configuration.
//!
//! This module provides configuration options for the GraphQL layer.
//! Configuration can be specified in `veterinary.toml` under the `[graphql]` section.
//!
//! # Example Configuration
//!
//! ```toml
//! [graphql]
//! path = "/graphql"
//! introspection = true
//! ```

use serde::{Deserialize, Serialize};

/// GraphQL API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLConfig {
    /// HTTP path the GraphQL endpoint is mounted on.
    /// Default: "/graphql"
    #[serde(default = "default_path")]
    pub path: String,

    /// Enable GraphQL introspection queries.
    /// Allows clients to query the schema itself.
    /// Default: true
    #[serde(default = "default_introspection")]
    pub introspection: bool,
}

fn default_path() -> String {
    "/graphql".to_string()
}

fn default_introspection() -> bool {
    true
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            introspection: default_introspection(),
        }
    }
}

impl GraphQLConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.path.starts_with('/') {
            return Err("graphql.path must start with '/'".into());
        }
        if self.path.len() < 2 {
            return Err("graphql.path must not be the root path".into());
        }
        Ok(())
    }

    /// Converts this config to a SchemaBuilderConfig.
    #[must_use]
    pub fn to_schema_builder_config(&self) -> crate::SchemaBuilderConfig {
        crate::SchemaBuilderConfig {
            introspection_enabled: self.introspection,
        }
    }
}
