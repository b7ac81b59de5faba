//! Configuration validation logic.

use crate::errors::ConfigError;
use crate::types::NotedeskConfig;

/// Validate a NotedeskConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Base URL, if set, must use `http://` or `https://`
/// - Request timeout, banner and flash lifetimes must be positive
/// - Fade may be zero (removal without a visible fade)
pub fn validate_config(config: &NotedeskConfig) -> Result<(), ConfigError> {
    if let Some(ref url) = config.server.base_url
        && !(url.starts_with("http://") || url.starts_with("https://"))
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "Invalid server base_url '{}'. Must start with http:// or https://",
                url
            ),
        });
    }

    if config.server.request_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "server.request_timeout_secs must be greater than 0".to_string(),
        });
    }

    for (field, value) in [
        ("timing.banner_dismiss_ms", config.timing.banner_dismiss_ms),
        ("timing.flash_dismiss_ms", config.timing.flash_dismiss_ms),
    ] {
        if value == Some(0) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must be greater than 0", field),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&NotedeskConfig::default()).is_ok());
    }

    #[test]
    fn test_https_base_url_is_valid() {
        let mut config = NotedeskConfig::default();
        config.server.base_url = Some("https://notes.example.edu".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = NotedeskConfig::default();
        config.server.base_url = Some("notes.example.edu".to_string());
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("notes.example.edu"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = NotedeskConfig::default();
        config.server.request_timeout_secs = Some(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_banner_lifetime() {
        let mut config = NotedeskConfig::default();
        config.timing.banner_dismiss_ms = Some(0);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("timing.banner_dismiss_ms"));
    }

    #[test]
    fn test_zero_fade_is_allowed() {
        let mut config = NotedeskConfig::default();
        config.timing.fade_ms = Some(0);
        assert!(validate_config(&config).is_ok());
    }
}
