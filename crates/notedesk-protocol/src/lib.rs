//! # notedesk-protocol
//!
//! JSON wire types for the four mutation endpoints exposed by the notes
//! server. Depends only on serde.

mod messages;
mod types;

pub use messages::{MutationRequest, MutationResult};
pub use types::{ResourceId, ResourceKind, Visibility};
