//! Export command handler

use anyhow::{Context, Result};
use std::path::Path;

use resume_compare::export::{write_artifacts, ExportFormat};
use resume_compare::Config;

use super::load_envelope;
use super::parse::report_export;

/// Write export artifacts for a saved envelope.
///
/// `out` falls back to `[export] directory`.
pub fn handle(file: &Path, out: Option<&Path>, format: ExportFormat) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    handle_with_config(file, out, format, &config)
}

pub(crate) fn handle_with_config(
    file: &Path,
    out: Option<&Path>,
    format: ExportFormat,
    config: &Config,
) -> Result<()> {
    let envelope = load_envelope(file)?;
    let dir = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.export_directory());
    let summary = write_artifacts(&envelope, &config.label_resolver(), &dir, format)
        .with_context(|| format!("Failed to export into {}", dir.display()))?;
    report_export(&summary, &dir);
    Ok(())
}
