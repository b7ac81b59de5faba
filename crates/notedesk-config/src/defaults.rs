//! Built-in fallback values used when no config file sets a field.

/// Address of the notes server's development instance.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_BANNER_DISMISS_MS: u64 = 3000;
pub const DEFAULT_FLASH_DISMISS_MS: u64 = 5000;
pub const DEFAULT_FADE_MS: u64 = 300;
