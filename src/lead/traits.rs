//! Trait abstraction for the submission sink to enable mocking in tests

use super::{Lead, SubmitError};
use async_trait::async_trait;

/// Destination for completed lead records.
///
/// The wizard treats the sink as a narrow asynchronous boundary: it hands
/// over the full answer record and waits for resolution. Current scope does
/// not distinguish outcomes beyond logging; the error type exists so a real
/// transport can slot in without changing callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Deliver a completed lead record
    async fn submit_lead(&mut self, lead: Lead) -> Result<(), SubmitError>;
}
