//! Stub client for delivering completed leads
//!
//! Stands in for the real lead endpoint (CRM / mail relay). It logs the
//! payload and resolves successfully after a short delay, matching the
//! latency shape of a real submission without any transport.

use super::{Lead, LeadSink, SubmitError};
use async_trait::async_trait;
use std::time::Duration;

/// Default endpoint recorded on submissions when none is configured
const DEFAULT_ENDPOINT: &str = "stub://lead-inbox";

/// Simulated round-trip latency of the stub endpoint
const STUB_LATENCY: Duration = Duration::from_millis(800);

/// Client for the lead submission endpoint
pub struct LeadClient {
    /// Where submissions would be delivered
    endpoint: String,
}

impl LeadClient {
    /// Create a client, preferring the `AQUAFORM_LEAD_ENDPOINT` environment
    /// variable, then the configured endpoint, then the stub default.
    pub fn new(configured_endpoint: Option<String>) -> Self {
        let endpoint = std::env::var("AQUAFORM_LEAD_ENDPOINT")
            .ok()
            .or(configured_endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LeadSink for LeadClient {
    async fn submit_lead(&mut self, lead: Lead) -> Result<(), SubmitError> {
        let payload =
            serde_json::to_string(&lead).map_err(|e| SubmitError::Encode(e.to_string()))?;
        tracing::info!(
            endpoint = %self.endpoint,
            lead_id = %lead.id,
            "submitting lead: {payload}"
        );
        tokio::time::sleep(STUB_LATENCY).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_configured_endpoint_is_used() {
        let client = LeadClient::new(Some("https://example.test/leads".to_string()));
        assert_eq!(client.endpoint(), "https://example.test/leads");
    }

    #[test]
    fn test_defaults_to_stub_endpoint() {
        let client = LeadClient::new(None);
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn test_submit_resolves_ok() {
        let mut client = LeadClient::new(None);
        let lead = Lead::new(BTreeMap::from([("name".to_string(), "Ada".to_string())]));
        assert!(client.submit_lead(lead).await.is_ok());
    }
}
