//! Command handlers for the rcmp CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod export;
pub mod models;
pub mod parse;
pub mod view;

use anyhow::{Context, Result};
use ratatui::text::Line;
use std::fs;
use std::path::Path;

use resume_compare::theme::{color_to_ansi, ANSI_RESET};
use resume_compare::tui::{CompareApp, CompareScreen};
use resume_compare::{ResponseEnvelope, Tab};

/// Whether stdout is an interactive terminal.
pub fn stdout_is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Parse a `--tab` value.
pub fn parse_tab(value: &str) -> Result<Tab> {
    value
        .parse::<Tab>()
        .with_context(|| format!("Invalid --tab value '{}'", value))
}

/// Read and normalize a saved envelope.
pub fn load_envelope(path: &Path) -> Result<ResponseEnvelope> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    ResponseEnvelope::from_json(&json)
        .with_context(|| format!("{} is not a resume result envelope", path.display()))
}

/// Render styled lines as text, with ANSI foreground colors when `color`.
pub fn render_lines(lines: &[Line<'_>], color: bool) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| match span.style.fg.filter(|_| color) {
                    Some(fg) if !span.content.is_empty() => {
                        format!("{}{}{}", color_to_ansi(fg), span.content, ANSI_RESET)
                    }
                    _ => span.content.to_string(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the comparison screen until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run_screen(screen: CompareScreen) -> Result<()> {
    let mut app = CompareApp::new(screen).context("Failed to start terminal UI")?;
    app.run()
}
