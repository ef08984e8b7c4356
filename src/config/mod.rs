//! Configuration management for rcmp

pub mod docs;
mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::labels::LabelResolver;
use crate::selection::{SelectionError, SelectionSet};
use crate::view::TabPolicy;

/// Environment variable overriding `api.url`.
pub const API_URL_ENV: &str = "RCMP_API_URL";

impl Config {
    /// Get the config file path (~/.config/rcmp/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check values serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.api.url.trim().is_empty() {
            return Err("api.url must not be empty".to_string());
        }
        if self.models.max_selected == 0 {
            return Err("models.max_selected must be at least 1".to_string());
        }
        Ok(())
    }

    /// API base URL: `--api-url` flag, then `RCMP_API_URL`, then `api.url`.
    pub fn effective_api_url(&self, flag: Option<&str>) -> String {
        let env = std::env::var(API_URL_ENV).ok();
        self.resolve_api_url(flag, env.as_deref())
    }

    /// Same precedence as `effective_api_url` with the environment passed in.
    pub fn resolve_api_url(&self, flag: Option<&str>, env: Option<&str>) -> String {
        [flag, env]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(&self.api.url)
            .to_string()
    }

    /// Selection used when `--models` is not given.
    ///
    /// An empty list in the file falls back to the built-in defaults.
    pub fn default_selection(&self) -> Result<SelectionSet, SelectionError> {
        if self.models.default.is_empty() {
            return Ok(SelectionSet::defaults());
        }
        SelectionSet::parse_all(&self.models.default)
    }

    /// Built-in labels with `[labels]` layered on top.
    pub fn label_resolver(&self) -> LabelResolver {
        LabelResolver::builtin().with_overrides(&self.labels)
    }

    pub fn tab_policy(&self) -> TabPolicy {
        TabPolicy::from_preserve_flag(self.view.preserve_tab)
    }

    /// Expand ~ in the export directory path
    pub fn export_directory(&self) -> PathBuf {
        let dir = &self.export.directory;
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }
}
