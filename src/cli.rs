//! CLI definitions for rcmp
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so command handlers and tests can build the command tree.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use resume_compare::export::ExportFormat;

/// Build clap styles using our theme colors.
///
/// - Cyan: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "rcmp")]
#[command(about = "[ Resume Compare ] - parse one resume with several models and compare the results")]
#[command(
    long_about = "Resume Compare (rcmp) - submit a resume to several extraction backends
and compare what each of them extracted, side by side.

QUICK START:
    rcmp parse cv.pdf                          Parse with the default models
    rcmp parse cv.pdf --models openai:gpt-4o,gemini:gemini-3-pro-preview
    rcmp view resume-data.json                 Reopen a saved result
    rcmp export resume-data.json --format csv  Write a CSV table
    rcmp models                                List known models

The parsing service URL comes from --api-url, then RCMP_API_URL, then
the [api] section of ~/.config/rcmp/config.toml."
)]
#[command(version = crate::version_string())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume with the selected models
    #[command(long_about = "Upload a resume to the parsing service and compare the results.

Accepted documents: .pdf, .doc, .docx, .txt. The comparison screen opens
when stdout is a terminal; otherwise (or with --print) the Contact tab is
printed as text.

EXAMPLES:
    rcmp parse cv.pdf
    rcmp parse cv.docx --models openai:gpt-4o,huggingface:openai/gpt-oss-120b:groq
    rcmp parse cv.pdf --print --export ./out")]
    Parse {
        /// Resume document to upload
        #[arg(help = "Resume document (.pdf, .doc, .docx, .txt)")]
        file: PathBuf,
        /// Comma-separated backend identifiers
        #[arg(long, short, help = "Models to compare, comma-separated (provider:model[:sub])")]
        models: Option<String>,
        /// Parsing service base URL
        #[arg(long, help = "Parsing service base URL")]
        api_url: Option<String>,
        /// Print instead of opening the comparison screen
        #[arg(long, help = "Print results instead of opening the comparison screen")]
        print: bool,
        /// Tab to print
        #[arg(long, short, default_value = "contact", help = "Tab to show first")]
        tab: String,
        /// Write JSON and CSV exports into this directory
        #[arg(long, help = "Also write resume-data.json/.csv into DIR")]
        export: Option<PathBuf>,
    },

    /// Open a saved result envelope
    #[command(long_about = "Open a previously exported resume-data.json.

The file goes through the same normalization as a live response, so
duplicate or incomplete results are handled identically.

EXAMPLES:
    rcmp view resume-data.json
    rcmp view resume-data.json --tab skills --print")]
    View {
        /// Envelope JSON file
        #[arg(help = "Exported resume-data.json")]
        file: PathBuf,
        /// Tab to show first
        #[arg(long, short, default_value = "contact", help = "Tab to show (contact, experience, education, skills, other)")]
        tab: String,
        /// Print instead of opening the comparison screen
        #[arg(long, help = "Print instead of opening the comparison screen")]
        print: bool,
    },

    /// Export a saved result envelope as JSON and/or CSV
    #[command(long_about = "Write resume-data.json and/or resume-data.csv for a saved envelope.

The CSV is skipped when no model produced a result.

EXAMPLES:
    rcmp export resume-data.json --out ./reports
    rcmp export resume-data.json --format csv")]
    Export {
        /// Envelope JSON file
        #[arg(help = "Exported resume-data.json")]
        file: PathBuf,
        /// Output directory
        #[arg(long, short, help = "Output directory (default: [export] directory)")]
        out: Option<PathBuf>,
        /// Artifacts to write
        #[arg(long, short, value_enum, default_value_t = ExportFormat::Both)]
        format: ExportFormat,
    },

    /// List the model catalog
    Models,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Print a completion script for the given shell.

EXAMPLES:
    rcmp completions bash > ~/.local/share/bash-completion/completions/rcmp
    rcmp completions zsh > ~/.zfunc/_rcmp")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration with documentation comments
    Show,
    /// Open configuration in $EDITOR
    Edit,
}
