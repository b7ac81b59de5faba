use notedesk_protocol::ResourceKind;

use super::messages;
use super::types::Operation;
use crate::errors::NotedeskError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MutationError {
    #[error("Could not find {kind} ID")]
    MissingIdentifier { kind: ResourceKind },

    #[error("Request failed: {message}")]
    Transport { message: String },

    #[error("Server responded with HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Server rejected the request: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },
}

impl MutationError {
    /// Failures whose detail is for diagnostics only; the user sees a
    /// generic network message.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            MutationError::Transport { .. }
                | MutationError::HttpStatus { .. }
                | MutationError::MalformedResponse { .. }
        )
    }

    /// Text shown in the alert for this failure.
    pub fn user_message(&self, operation: Operation) -> String {
        match self {
            MutationError::MissingIdentifier { kind } => messages::missing_identifier(*kind),
            MutationError::Rejected { message } => format!(
                "Error: {}",
                message
                    .as_deref()
                    .unwrap_or_else(|| messages::failure_fallback(operation))
            ),
            _ => messages::network_error(operation).to_string(),
        }
    }
}

impl NotedeskError for MutationError {
    fn error_code(&self) -> &'static str {
        match self {
            MutationError::MissingIdentifier { .. } => "MISSING_IDENTIFIER",
            MutationError::Transport { .. } => "TRANSPORT_FAILED",
            MutationError::HttpStatus { .. } => "HTTP_STATUS_NOT_OK",
            MutationError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            MutationError::Rejected { .. } => "MUTATION_REJECTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            MutationError::MissingIdentifier { .. } | MutationError::Rejected { .. }
        )
    }
}
