//! # notedesk-config
//!
//! TOML configuration types, loading, and validation for notedesk.
//!
//! Single source of truth for `NotedeskConfig`. Depends only on
//! `notedesk-paths` and `notedesk-protocol`.

mod defaults;
mod loading;
mod validation;

pub mod errors;
pub mod types;

pub use errors::ConfigError;
pub use loading::{load_config_file, load_hierarchy, merge_configs};
pub use types::{ConfirmConfig, NotedeskConfig, RemovalConfig, RemovalMode, ServerConfig, TimingConfig};
pub use validation::validate_config;

impl NotedeskConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
