use tracing::{debug, warn};

use super::types::Operation;

/// Lifecycle of a single mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationState {
    Idle,
    Requesting,
    Succeeded,
    ViewReconciled,
    Failed,
    ErrorReported,
    Aborted,
}

impl MutationState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            MutationState::ViewReconciled | MutationState::ErrorReported | MutationState::Aborted
        )
    }

    pub fn can_transition_to(&self, next: MutationState) -> bool {
        use MutationState::*;
        matches!(
            (self, next),
            (Idle, Requesting)
                | (Idle, Failed)
                | (Idle, Aborted)
                | (Requesting, Succeeded)
                | (Requesting, Failed)
                | (Succeeded, ViewReconciled)
                | (Failed, ErrorReported)
        )
    }
}

impl std::fmt::Display for MutationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MutationState::Idle => "idle",
            MutationState::Requesting => "requesting",
            MutationState::Succeeded => "succeeded",
            MutationState::ViewReconciled => "view_reconciled",
            MutationState::Failed => "failed",
            MutationState::ErrorReported => "error_reported",
            MutationState::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Tracks and logs the state of one in-flight mutation.
#[derive(Debug)]
pub(crate) struct StateTracker {
    operation: Operation,
    state: MutationState,
}

impl StateTracker {
    pub(crate) fn new(operation: Operation) -> Self {
        Self {
            operation,
            state: MutationState::Idle,
        }
    }

    pub(crate) fn operation(&self) -> Operation {
        self.operation
    }

    pub(crate) fn state(&self) -> MutationState {
        self.state
    }

    pub(crate) fn advance(&mut self, next: MutationState) {
        if !self.state.can_transition_to(next) {
            warn!(
                event = "core.mutation.transition_unexpected",
                operation = %self.operation,
                from = %self.state,
                to = %next
            );
        }
        debug!(
            event = "core.mutation.state_changed",
            operation = %self.operation,
            from = %self.state,
            to = %next
        );
        self.state = next;
    }
}
