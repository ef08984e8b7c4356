//! Model selection state.
//!
//! Tracks which extraction backends take part in the next submission.
//! The set is never empty: removing the last member is refused as a no-op.
//! There is no upper bound here; the interactive picker limits how many
//! models can be added, the state itself accepts any number.

use crate::backend_id::{BackendId, BackendIdError};
use thiserror::Error;

/// Errors from building a selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("At least one model must be selected")]
    Empty,

    #[error(transparent)]
    InvalidId(#[from] BackendIdError),
}

/// Outcome of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The identifier was added
    Added,
    /// The identifier was removed
    Removed,
    /// The identifier is the last member and was kept
    KeptLast,
}

/// Ordered, duplicate-free, non-empty set of backend identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<BackendId>,
}

impl SelectionSet {
    /// Build a selection from identifiers, dropping duplicates.
    pub fn from_ids<I>(ids: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = BackendId>,
    {
        let mut set: Vec<BackendId> = Vec::new();
        for id in ids {
            if !set.contains(&id) {
                set.push(id);
            }
        }
        if set.is_empty() {
            return Err(SelectionError::Empty);
        }
        Ok(Self { ids: set })
    }

    /// Parse a comma-separated list such as `openai:gpt-4o,gemini:gemini-3-pro-preview`.
    ///
    /// Blank items are skipped.
    pub fn parse_list(list: &str) -> Result<Self, SelectionError> {
        let ids = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<BackendId>)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_ids(ids)
    }

    /// Parse each string as an identifier.
    pub fn parse_all<S: AsRef<str>>(items: &[S]) -> Result<Self, SelectionError> {
        let ids = items
            .iter()
            .map(|s| s.as_ref().parse::<BackendId>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_ids(ids)
    }

    /// The default selection used when nothing is configured.
    pub fn defaults() -> Self {
        Self {
            ids: DEFAULT_MODELS
                .iter()
                .filter_map(|id| id.parse().ok())
                .collect(),
        }
    }

    /// Add the identifier if absent, remove it if present.
    ///
    /// Removing the sole member is refused; the set is left unchanged.
    pub fn toggle(&mut self, id: &BackendId) -> ToggleOutcome {
        match self.ids.iter().position(|existing| existing == id) {
            Some(_) if self.ids.len() == 1 => ToggleOutcome::KeptLast,
            Some(idx) => {
                self.ids.remove(idx);
                ToggleOutcome::Removed
            }
            None => {
                self.ids.push(id.clone());
                ToggleOutcome::Added
            }
        }
    }

    /// Check whether an identifier is selected.
    pub fn contains(&self, id: &BackendId) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected backends (always at least one).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BackendId> {
        self.ids.iter()
    }

    /// Request parameter value: identifiers comma-joined in iteration order.
    pub fn to_query_value(&self) -> String {
        self.ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a BackendId;
    type IntoIter = std::slice::Iter<'a, BackendId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

/// Models selected when the user has not chosen any.
pub const DEFAULT_MODELS: [&str; 2] = ["openai:gpt-4o", "openai:gpt-5.1"];

/// Maximum number of models the interactive picker allows.
pub const DEFAULT_MAX_SELECTED: usize = 3;

/// A backend offered by the model picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOption {
    /// Canonical identifier
    pub id: &'static str,
    /// Picker label
    pub label: &'static str,
    /// Short tag shown next to the label
    pub badge: Option<&'static str>,
}

impl ModelOption {
    /// Parsed identifier for this option.
    pub fn backend_id(&self) -> Result<BackendId, BackendIdError> {
        self.id.parse()
    }
}

/// Backends offered by the model picker, in display order.
pub const MODEL_OPTIONS: [ModelOption; 6] = [
    ModelOption {
        id: "openai:gpt-4o",
        label: "GPT-4o (OpenAI)",
        badge: None,
    },
    ModelOption {
        id: "openai:gpt-5.1",
        label: "GPT-5.1 (OpenAI)",
        badge: Some("New"),
    },
    ModelOption {
        id: "gemini:gemini-3-pro-preview",
        label: "Gemini 3 Pro Preview",
        badge: Some("Gemini"),
    },
    ModelOption {
        id: "huggingface:deepseek-ai/DeepSeek-V3:together",
        label: "DeepSeek-V3.1 (HF via Together)",
        badge: Some("HF"),
    },
    ModelOption {
        id: "huggingface:Qwen/Qwen3-235B-A22B:fireworks-ai",
        label: "Qwen3-235B-A22B (HF via Fireworks)",
        badge: Some("HF"),
    },
    ModelOption {
        id: "huggingface:openai/gpt-oss-120b:groq",
        label: "GPT-OSS-120B (HF via Groq)",
        badge: Some("Groq"),
    },
];
