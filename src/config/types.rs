//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::selection::{DEFAULT_MAX_SELECTED, DEFAULT_MODELS};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub export: ExportConfig,
    /// Extra display labels keyed by `provider:modelName`
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

/// Parsing service connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,
}

pub fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
        }
    }
}

/// Model selection defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Backends selected when `--models` is not given
    #[serde(default = "default_models")]
    pub default: Vec<String>,
    /// Upper bound enforced by the interactive model picker
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,
}

pub fn default_models() -> Vec<String> {
    DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
}

pub fn default_max_selected() -> usize {
    DEFAULT_MAX_SELECTED
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            default: default_models(),
            max_selected: default_max_selected(),
        }
    }
}

/// Comparison view behavior
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Keep the active tab when a new result set arrives
    #[serde(default)]
    pub preserve_tab: bool,
}

/// Export destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: String,
}

pub fn default_export_directory() -> String {
    ".".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
        }
    }
}
