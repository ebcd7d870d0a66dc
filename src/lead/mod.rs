//! Lead payload and submission sink

mod client;
mod traits;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

pub use client::LeadClient;
pub use traits::LeadSink;

#[cfg(test)]
pub use traits::MockLeadSink;

/// A completed answer record, packaged for submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Field name to entered value, one entry per funnel field
    pub answers: BTreeMap<String, String>,
}

impl Lead {
    pub fn new(answers: BTreeMap<String, String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            answers,
        }
    }
}

/// Failure delivering a lead to the sink.
///
/// Current scope treats failure like success after logging; the variants
/// exist so a real transport can surface a retry affordance later.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("failed to encode lead payload: {0}")]
    Encode(String),
    #[error("lead endpoint rejected submission: {0}")]
    Rejected(String),
}
