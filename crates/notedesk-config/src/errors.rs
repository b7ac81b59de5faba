#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Could not locate config directory: {message}")]
    PathUnavailable { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Missing config files are expected and skipped during loading.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::IoError { source } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
