use notedesk_protocol::{ResourceId, ResourceKind, Visibility};

use super::errors::MutationError;

/// The user action a mutation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Delete(ResourceKind),
    ShareToggle,
}

impl Operation {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Operation::Delete(kind) => *kind,
            Operation::ShareToggle => ResourceKind::Note,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Delete(kind) => write!(f, "delete_{}", kind),
            Operation::ShareToggle => write!(f, "toggle_share"),
        }
    }
}

/// How the page was reconciled after a confirmed success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Exactly one element was removed.
    Removed { kind: ResourceKind, id: ResourceId },
    /// The server confirmed the deletion but the page held no element for it.
    ElementMissing { kind: ResourceKind, id: ResourceId },
    /// Every share button bound to the note now shows `visibility`.
    VisibilityApplied {
        note_id: ResourceId,
        visibility: Visibility,
        buttons_updated: usize,
    },
}

/// Terminal state of one mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Reconciled(Reconciliation),
    /// The failure was shown to the user; the page is unchanged.
    ErrorReported(MutationError),
    /// The user declined the confirmation; nothing was sent.
    Aborted,
}

impl MutationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MutationOutcome::Reconciled(_))
    }

    pub fn error(&self) -> Option<&MutationError> {
        match self {
            MutationOutcome::ErrorReported(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(
            Operation::Delete(ResourceKind::Student).to_string(),
            "delete_student"
        );
        assert_eq!(Operation::ShareToggle.to_string(), "toggle_share");
        assert_eq!(Operation::ShareToggle.kind(), ResourceKind::Note);
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(!MutationOutcome::Aborted.is_success());
        let failed = MutationOutcome::ErrorReported(MutationError::HttpStatus { status: 500 });
        assert_eq!(
            failed.error(),
            Some(&MutationError::HttpStatus { status: 500 })
        );
    }
}
