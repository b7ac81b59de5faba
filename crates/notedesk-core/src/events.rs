use tracing::{error, info, warn};

use crate::errors::NotedeskError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log an application error at a level matching its origin.
///
/// User errors (bad input, rejected requests) are warnings; everything else
/// is an error.
pub fn log_app_error(error: &dyn NotedeskError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error,
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error,
        );
    }
}
