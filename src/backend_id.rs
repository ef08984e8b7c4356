//! Backend identifiers.
//!
//! A backend is addressed as `provider:modelName[:subProvider]`, for example
//! `openai:gpt-4o` or `huggingface:openai/gpt-oss-120b:groq`. The same key is
//! used as the request parameter for a submission and as the join key between
//! a result and its display label.
//!
//! Parsing also accepts two shorthand forms:
//! - a bare model name (`gpt-4o`), which defaults to the `openai` provider
//! - the selector form `provider+subProvider:modelName`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Provider assumed when an identifier omits it.
pub const DEFAULT_PROVIDER: &str = "openai";

/// Errors from parsing a backend identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendIdError {
    #[error("Empty backend identifier")]
    Empty,

    #[error("Backend identifier '{0}' has an empty provider")]
    EmptyProvider(String),

    #[error("Backend identifier '{0}' has an empty model name")]
    EmptyModel(String),
}

/// Composite key naming one extraction backend.
///
/// Serializes with the wire field names used by the parsing service
/// (`provider`, `model_name`, `inference_provider`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BackendId {
    /// Provider family, always lowercase (e.g. `openai`, `huggingface`)
    pub provider: String,
    /// Model name as the provider knows it
    pub model_name: String,
    /// Hosting provider behind a router provider (e.g. `groq`)
    #[serde(
        rename = "inference_provider",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_provider: Option<String>,
}

impl BackendId {
    /// Create an identifier from its parts.
    pub fn new(provider: &str, model_name: &str) -> Self {
        Self {
            provider: provider.trim().to_lowercase(),
            model_name: model_name.trim().to_string(),
            sub_provider: None,
        }
    }

    /// Attach a sub-provider. Blank values are ignored.
    pub fn with_sub_provider(mut self, sub_provider: &str) -> Self {
        let sub = sub_provider.trim();
        self.sub_provider = if sub.is_empty() {
            None
        } else {
            Some(sub.to_string())
        };
        self
    }

    /// Build an identifier from wire fields, if both required parts are present.
    ///
    /// Without an explicit sub-provider, a `model:sub` model name is split the
    /// same way as the request parameter, since the service echoes back the
    /// model exactly as it was requested.
    pub fn from_parts(
        provider: Option<&str>,
        model_name: Option<&str>,
        sub_provider: Option<&str>,
    ) -> Option<Self> {
        let provider = provider.map(str::trim).filter(|p| !p.is_empty())?;
        let model_name = model_name.map(str::trim).filter(|m| !m.is_empty())?;
        match sub_provider.map(str::trim).filter(|s| !s.is_empty()) {
            Some(sub) => Some(Self::new(provider, model_name).with_sub_provider(sub)),
            None => format!("{}:{}", provider, model_name).parse().ok(),
        }
    }

    /// Key used for label lookup: `provider:modelName`, sub-provider excluded.
    pub fn label_key(&self) -> String {
        format!("{}:{}", self.provider, self.model_name)
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_provider {
            Some(sub) => write!(f, "{}:{}:{}", self.provider, self.model_name, sub),
            None => write!(f, "{}:{}", self.provider, self.model_name),
        }
    }
}

impl FromStr for BackendId {
    type Err = BackendIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(BackendIdError::Empty);
        }

        let mut parts = trimmed.splitn(3, ':');
        let first = parts.next().unwrap_or_default();
        let (provider_part, model, sub) = match (parts.next(), parts.next()) {
            (None, _) => (DEFAULT_PROVIDER, first, None),
            (Some(model), sub) => (first, model, sub),
        };

        // Selector form: provider+sub:model
        let (provider, selector_sub) = match provider_part.split_once('+') {
            Some((provider, sub)) => (provider, Some(sub)),
            None => (provider_part, None),
        };

        if provider.trim().is_empty() {
            return Err(BackendIdError::EmptyProvider(trimmed.to_string()));
        }
        if model.trim().is_empty() {
            return Err(BackendIdError::EmptyModel(trimmed.to_string()));
        }

        let id = BackendId::new(provider, model);
        Ok(match sub.or(selector_sub) {
            Some(sub) => id.with_sub_provider(sub),
            None => id,
        })
    }
}
