//! Terminal implementation of the alert/confirm dialogs.

use std::io::{self, BufRead, Write};

use notedesk_core::Notifier;
use tracing::warn;

use crate::color;

/// Alerts and prompts go to stderr so `--json` output stays parseable.
/// Confirmations read a `y`/`yes` line from stdin.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", color::danger_stderr(message));
    }

    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        if let Err(e) = io::stderr().flush() {
            warn!(event = "cli.confirm.flush_failed", error = %e);
        }

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(_) => is_confirmation_accepted(&input),
            Err(e) => {
                warn!(event = "cli.confirm.read_failed", error = %e);
                false
            }
        }
    }
}

/// Check if user input confirms an action.
pub fn is_confirmation_accepted(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_accepted() {
        assert!(is_confirmation_accepted("y\n"));
        assert!(is_confirmation_accepted("YES"));
        assert!(is_confirmation_accepted("  yes  "));
    }

    #[test]
    fn test_confirmation_declined() {
        assert!(!is_confirmation_accepted(""));
        assert!(!is_confirmation_accepted("n"));
        assert!(!is_confirmation_accepted("yep"));
    }
}
