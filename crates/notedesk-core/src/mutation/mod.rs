//! Remote mutation dispatcher.
//!
//! Each operation sends a single request, waits for the result and then
//! either reconciles the page or reports the failure:
//!
//! ```text
//! Idle -> Requesting -> Succeeded -> ViewReconciled
//!                    \-> Failed -> ErrorReported
//! Idle -> Failed -> ErrorReported   (missing identifier)
//! Idle -> Aborted                   (confirmation declined)
//! ```
//!
//! There is no retry transition.

pub mod dispatcher;
pub mod errors;
pub mod messages;
pub mod policy;
pub mod state;
pub mod types;

pub use dispatcher::Dispatcher;
pub use errors::MutationError;
pub use policy::{DispatchPolicy, RemovalStrategy};
pub use state::MutationState;
pub use types::{MutationOutcome, Operation, Reconciliation};
