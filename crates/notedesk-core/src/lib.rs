//! notedesk-core: Core library for remote note and profile mutations
//!
//! Sends one mutating request per user action to the notes server and
//! reconciles the local page model with the result. Used by the CLI.
//!
//! # Main Entry Points
//!
//! - [`mutation`] - The dispatcher: deletions and share toggles
//! - [`view`] - The page model the dispatcher reconciles
//! - [`notify`] - Alert/confirm seam and banner lifetimes
//! - [`transport`] - HTTP delivery of mutation requests

pub mod errors;
pub mod events;
pub mod logging;
pub mod mutation;
pub mod notify;
pub mod transport;
pub mod view;

pub use notedesk_config::{ConfigError, NotedeskConfig};
pub use notedesk_protocol::{MutationRequest, MutationResult, ResourceId, ResourceKind, Visibility};

pub use errors::{NotedeskError, NotedeskResult};
pub use mutation::{
    DispatchPolicy, Dispatcher, MutationError, MutationOutcome, Operation, Reconciliation,
    RemovalStrategy,
};
pub use notify::Notifier;
pub use transport::{HttpTransport, Transport};
pub use view::{
    Banner, BannerLevel, BannerOrigin, Page, ShareButton, SharedPage, ViewElement, with_page,
};

pub use logging::init_logging;
