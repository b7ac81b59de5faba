//! Delivery of mutation requests to the notes server.

pub mod http;

use async_trait::async_trait;
use notedesk_protocol::{MutationRequest, MutationResult};

use crate::mutation::MutationError;

pub use http::HttpTransport;

/// Sends one mutation request and returns the parsed result body.
///
/// Implementations map network failures, non-2xx statuses and bodies that
/// are not a result object to [`MutationError`]. A parsed body is returned
/// as-is, including `success: false`; the dispatcher interprets it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &MutationRequest) -> Result<MutationResult, MutationError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: &MutationRequest) -> Result<MutationResult, MutationError> {
        (**self).send(request).await
    }
}
