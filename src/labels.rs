//! Display labels for backends.
//!
//! Resolution is pure and total: an identifier with no table entry falls
//! back to its model name, never to an error.

use std::collections::BTreeMap;

use crate::backend_id::BackendId;

/// Labels shipped with the binary, keyed by `provider:modelName`.
pub const BUILTIN_LABELS: [(&str, &str); 9] = [
    ("openai:gpt-4o", "GPT-4o"),
    ("openai:gpt-5.1", "GPT-5.1"),
    ("openai:gpt-5-preview", "GPT-5 Preview"),
    ("gemini:gemini-1.5-pro-latest", "Gemini 1.5 Pro"),
    ("gemini:gemini-3-pro-preview", "Gemini 3 Pro Preview"),
    (
        "huggingface:deepseek-ai/DeepSeek-R1-Distill-Llama-70B",
        "DeepSeek R1",
    ),
    ("huggingface:deepseek-ai/DeepSeek-V3", "DeepSeek-V3.1"),
    ("huggingface:Qwen/Qwen3-235B-A22B", "Qwen3-235B-A22B"),
    ("huggingface:openai/gpt-oss-120b", "GPT-OSS-120B"),
];

/// Label and provider text shown in a panel header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLabel {
    pub label: String,
    /// `PROVIDER` or `PROVIDER (subProvider)`
    pub provider_display: String,
}

/// Maps backend identifiers to human-readable labels.
#[derive(Debug, Clone)]
pub struct LabelResolver {
    table: BTreeMap<String, String>,
}

impl LabelResolver {
    /// Resolver over the built-in table.
    pub fn builtin() -> Self {
        Self {
            table: BUILTIN_LABELS
                .iter()
                .map(|(key, label)| (key.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// Layer extra entries on top; overrides win over built-ins.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (key, label) in overrides {
            self.table.insert(key.clone(), label.clone());
        }
        self
    }

    /// Resolve the label for an identifier.
    ///
    /// The sub-provider never takes part in the lookup; it only shows up in
    /// the provider display.
    pub fn resolve(&self, id: &BackendId) -> ResolvedLabel {
        let label = self
            .table
            .get(&id.label_key())
            .cloned()
            .unwrap_or_else(|| id.model_name.clone());
        let provider = id.provider.to_uppercase();
        let provider_display = match &id.sub_provider {
            Some(sub) => format!("{} ({})", provider, sub),
            None => provider,
        };
        ResolvedLabel {
            label,
            provider_display,
        }
    }

    /// Shorthand for the label alone.
    pub fn label(&self, id: &BackendId) -> String {
        self.resolve(id).label
    }
}

impl Default for LabelResolver {
    fn default() -> Self {
        Self::builtin()
    }
}
