use std::error::Error;

/// Base trait for all application errors
pub trait NotedeskError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type NotedeskResult<T> = Result<T, Box<dyn NotedeskError>>;

impl NotedeskError for notedesk_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            notedesk_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            notedesk_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            notedesk_config::ConfigError::PathUnavailable { .. } => "CONFIG_PATH_UNAVAILABLE",
            notedesk_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            notedesk_config::ConfigError::ConfigParseError { .. }
                | notedesk_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}
