//! Wire shape of the parsing service response.
//!
//! These types accept whatever the service sends: every field may be
//! missing or null. The aggregator turns them into the strict envelope.

use serde::Deserialize;

use crate::backend_id::BackendId;

/// Response body of one submission, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<RawResult>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<RawFailure>,
}

/// One backend's answer as received.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub inference_provider: Option<String>,
    /// Record as sent; checked per backend so one bad shape only fails that backend
    #[serde(default)]
    pub resume: Option<serde_json::Value>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
    #[serde(default)]
    pub api_latency_ms: Option<f64>,
    #[serde(default)]
    pub cost_usd: Option<f64>,
    #[serde(default)]
    pub raw_response: Option<serde_json::Value>,
}

impl RawResult {
    /// Identifier, when provider and model name are both present.
    pub fn backend_id(&self) -> Option<BackendId> {
        BackendId::from_parts(
            self.provider.as_deref(),
            self.model_name.as_deref(),
            self.inference_provider.as_deref(),
        )
    }
}

/// One backend's error as received.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFailure {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub inference_provider: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RawFailure {
    pub fn backend_id(&self) -> Option<BackendId> {
        BackendId::from_parts(
            self.provider.as_deref(),
            self.model_name.as_deref(),
            self.inference_provider.as_deref(),
        )
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
