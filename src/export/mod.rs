//! Export of a response envelope.
//!
//! This module provides:
//! - `to_json` - the full envelope, pretty-printed, lossless
//! - `to_csv` - a `Model,Field,Value` table of the headline fields
//! - `write_artifacts` - both written into a directory
//!
//! Exports read the envelope as held; the active tab plays no part.

mod csv_table;

pub use csv_table::{to_csv, CSV_HEADER};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::envelope::ResponseEnvelope;
use crate::labels::LabelResolver;

pub const JSON_FILE_NAME: &str = "resume-data.json";
pub const CSV_FILE_NAME: &str = "resume-data.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize envelope")]
    Json(#[from] serde_json::Error),

    #[error("Failed to encode CSV")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which artifacts to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    #[default]
    Both,
}

impl ExportFormat {
    pub fn includes_json(self) -> bool {
        matches!(self, ExportFormat::Json | ExportFormat::Both)
    }

    pub fn includes_csv(self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Both)
    }
}

/// What `write_artifacts` produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub json: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    /// CSV was requested but there were no entries to tabulate
    pub csv_skipped: bool,
}

/// Full envelope as pretty JSON with wire field names.
pub fn to_json(envelope: &ResponseEnvelope) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(envelope)?)
}

/// Write the requested artifacts into `dir`, creating it if needed.
pub fn write_artifacts(
    envelope: &ResponseEnvelope,
    resolver: &LabelResolver,
    dir: &Path,
    format: ExportFormat,
) -> Result<ExportSummary, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut summary = ExportSummary::default();

    if format.includes_json() {
        let path = dir.join(JSON_FILE_NAME);
        write_file(&path, &to_json(envelope)?)?;
        info!(path = %path.display(), "wrote JSON export");
        summary.json = Some(path);
    }

    if format.includes_csv() {
        match to_csv(envelope, resolver)? {
            Some(table) => {
                let path = dir.join(CSV_FILE_NAME);
                write_file(&path, &table)?;
                info!(path = %path.display(), "wrote CSV export");
                summary.csv = Some(path);
            }
            None => {
                info!("no successful results, CSV export skipped");
                summary.csv_skipped = true;
            }
        }
    }

    Ok(summary)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
