//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.notedesk/config.toml`
//! 3. **Project config** - `./.notedesk/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the caller)

use std::fs;
use std::path::Path;

use notedesk_paths::NotedeskPaths;
use tracing::debug;

use crate::errors::ConfigError;
use crate::types::{ConfirmConfig, NotedeskConfig, RemovalConfig, ServerConfig, TimingConfig};
use crate::validation::validate_config;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be parsed, or if validation
/// fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<NotedeskConfig, ConfigError> {
    let paths = NotedeskPaths::resolve().map_err(|e| ConfigError::PathUnavailable {
        message: e.to_string(),
    })?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(
        &paths.user_config(),
        &NotedeskPaths::project_config(&project_root),
    )
}

/// Load and merge the user and project config files at explicit paths.
pub(crate) fn load_hierarchy_from(
    user_config: &Path,
    project_config: &Path,
) -> Result<NotedeskConfig, ConfigError> {
    let mut config = NotedeskConfig::default();

    for path in [user_config, project_config] {
        match load_config_file(path) {
            Ok(loaded) => config = merge_configs(config, loaded),
            Err(e) if e.is_not_found() => {
                debug!(
                    event = "config.file_skipped",
                    path = %path.display(),
                    reason = "not found"
                );
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<NotedeskConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: NotedeskConfig, override_config: NotedeskConfig) -> NotedeskConfig {
    NotedeskConfig {
        server: ServerConfig::merge(&base.server, &override_config.server),
        timing: TimingConfig::merge(&base.timing, &override_config.timing),
        removal: RemovalConfig::merge(&base.removal, &override_config.removal),
        confirm: ConfirmConfig::merge(&base.confirm, &override_config.confirm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RemovalMode;
    use notedesk_protocol::ResourceKind;

    #[test]
    fn test_missing_files_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_hierarchy_from(
            &dir.path().join("user.toml"),
            &dir.path().join("project.toml"),
        )
        .unwrap();
        assert_eq!(config, NotedeskConfig::default());
    }

    #[test]
    fn test_project_overrides_user() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.toml");
        let project = dir.path().join("project.toml");
        fs::write(
            &user,
            "[server]\nbase_url = \"https://notes.example.edu\"\n\n[timing]\nfade_ms = 150\n",
        )
        .unwrap();
        fs::write(&project, "[timing]\nfade_ms = 600\n\n[removal]\nstudent = \"immediate\"\n")
            .unwrap();

        let config = load_hierarchy_from(&user, &project).unwrap();
        assert_eq!(config.server.base_url(), "https://notes.example.edu");
        assert_eq!(config.timing.fade_ms, Some(600));
        assert_eq!(
            config.removal.mode_for(ResourceKind::Student),
            RemovalMode::Immediate
        );
    }

    #[test]
    fn test_load_config_file_parse_error_returns_err() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "invalid = toml [[[").unwrap();
        let result = load_config_file(&path);
        assert!(matches!(
            result,
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_config_file_not_found_is_io_error() {
        let result = load_config_file(Path::new("/nonexistent/path/config.toml"));
        let err = result.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_merged_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.toml");
        fs::write(&user, "[server]\nbase_url = \"ftp://notes\"\n").unwrap();

        let result = load_hierarchy_from(&user, &dir.path().join("missing.toml"));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }
}
