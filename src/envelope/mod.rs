//! Response envelopes: the normalized outcome of one submission.
//!
//! This module provides:
//! - `RawEnvelope` - the response body as delivered by the parsing service
//! - `ResultAggregator` - partitions a raw envelope into successes and failures
//! - `ResponseEnvelope` - the comparison-ready result set held by the view
//!
//! # Invariants
//!
//! Within one `ResponseEnvelope` every backend identifier appears at most
//! once across `entries` and `failures`. Entries always carry a record;
//! a backend that answered without one is listed as a failure.

mod aggregate;
mod raw;

pub use aggregate::{
    AggregationReport, ResultAggregator, MISSING_RECORD_MESSAGE, NO_RESPONSE_MESSAGE,
    UNATTRIBUTED_MESSAGE, UNREADABLE_RECORD_PREFIX,
};
pub use raw::{RawEnvelope, RawFailure, RawResult};

use serde::{Deserialize, Serialize};

use crate::backend_id::BackendId;
use crate::record::Record;
use crate::selection::SelectionSet;

/// A successful per-backend extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    #[serde(flatten)]
    pub id: BackendId,
    /// The extracted record
    #[serde(rename = "resume")]
    pub record: Record,
    /// Model-reported confidence in `[0, 1]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// End-to-end parse latency
    #[serde(rename = "latency_ms", skip_serializing_if = "Option::is_none")]
    pub total_latency_ms: Option<f64>,
    /// Model API call latency only
    #[serde(rename = "api_latency_ms", skip_serializing_if = "Option::is_none")]
    pub model_latency_ms: Option<f64>,
    /// Estimated cost of the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,
    /// Backend response as received, kept opaque for export
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<serde_json::Value>,
}

impl ResultEntry {
    /// Entry with a record and no metrics.
    pub fn new(id: BackendId, record: Record) -> Self {
        Self {
            id,
            record,
            confidence: None,
            total_latency_ms: None,
            model_latency_ms: None,
            cost_usd: None,
            raw_response: None,
        }
    }
}

/// A backend that errored or produced nothing usable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureEntry {
    /// Absent when the failure could not be attributed to a backend
    #[serde(flatten)]
    pub id: Option<BackendId>,
    /// Human-readable reason
    pub message: String,
}

impl FailureEntry {
    pub fn new(id: Option<BackendId>, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }

    /// Identifier text for display, `Unknown` when absent.
    pub fn display_id(&self) -> String {
        self.id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Normalized outcome of one submission.
///
/// Built once by `ResultAggregator` and never mutated afterwards; a new
/// submission replaces it wholesale. Deserializing goes through the
/// aggregator, so JSON read back from an export upholds the same invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEnvelope")]
pub struct ResponseEnvelope {
    #[serde(rename = "results")]
    entries: Vec<ResultEntry>,
    #[serde(rename = "errors")]
    failures: Vec<FailureEntry>,
}

impl ResponseEnvelope {
    /// Normalize a raw envelope with the default aggregator.
    pub fn from_raw(raw: RawEnvelope) -> Self {
        ResultAggregator::new().aggregate(raw).0
    }

    /// Parse and normalize a JSON response body.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Successful entries in arrival order.
    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    /// Failures in arrival order.
    pub fn failures(&self) -> &[FailureEntry] {
        &self.failures
    }

    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Whether an identifier already appears in either partition.
    pub fn mentions(&self, id: &BackendId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
            || self.failures.iter().any(|f| f.id.as_ref() == Some(id))
    }

    /// Record selected backends missing from both partitions as failures.
    ///
    /// A backend the service silently dropped is treated as failed, so the
    /// view accounts for every model the user asked for.
    pub fn reconcile(mut self, selection: &SelectionSet) -> Self {
        let missing: Vec<BackendId> = selection
            .iter()
            .filter(|id| !self.mentions(id))
            .cloned()
            .collect();
        for id in missing {
            tracing::warn!(backend = %id, "selected backend absent from response");
            self.failures
                .push(FailureEntry::new(Some(id), NO_RESPONSE_MESSAGE));
        }
        self
    }

    /// Provider summary used in the view subtitle, e.g. `openai, huggingface/groq`.
    pub fn provider_summary(&self) -> String {
        self.entries
            .iter()
            .map(|e| match &e.id.sub_provider {
                Some(sub) => format!("{}/{}", e.id.provider, sub),
                None => e.id.provider.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn from_parts(entries: Vec<ResultEntry>, failures: Vec<FailureEntry>) -> Self {
        Self { entries, failures }
    }
}

impl From<RawEnvelope> for ResponseEnvelope {
    fn from(raw: RawEnvelope) -> Self {
        Self::from_raw(raw)
    }
}
