//! Parse command handler

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

use resume_compare::client::{submit_and_aggregate, Document, HttpParseService, ParseService};
use resume_compare::export::{write_artifacts, ExportFormat, ExportSummary};
use resume_compare::theme::current_theme;
use resume_compare::tui::{CompareScreen, Submission};
use resume_compare::view::panel::comparison_lines;
use resume_compare::{ComparisonState, Config, SelectionSet};

use super::{parse_tab, render_lines, stdout_is_tty};

/// Arguments of `rcmp parse`.
pub struct ParseArgs {
    pub file: PathBuf,
    pub models: Option<String>,
    pub api_url: Option<String>,
    pub print: bool,
    pub tab: String,
    pub export: Option<PathBuf>,
}

/// Resolve the model selection: `--models` wins over `[models] default`.
pub fn resolve_selection(models: Option<&str>, config: &Config) -> Result<SelectionSet> {
    let selection = match models {
        Some(list) => SelectionSet::parse_list(list).context("Invalid --models value")?,
        None => config
            .default_selection()
            .context("Invalid [models] default in config")?,
    };
    if selection.len() > config.models.max_selected {
        warn!(
            selected = selection.len(),
            max = config.models.max_selected,
            "more models selected than the picker allows"
        );
    }
    Ok(selection)
}

/// Submit a resume and show the comparison.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: ParseArgs) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let selection = resolve_selection(args.models.as_deref(), &config)?;
    let tab = parse_tab(&args.tab)?;
    let document = Document::load(&args.file)
        .with_context(|| format!("Cannot upload {}", args.file.display()))?;

    let api_url = config.effective_api_url(args.api_url.as_deref());
    let service: Arc<dyn ParseService> = Arc::new(
        HttpParseService::new(&api_url).context("Failed to set up HTTP client")?,
    );

    let theme = current_theme();
    eprintln!(
        "{}",
        theme.secondary_text(&format!(
            "Parsing {} with {} model(s) via {}...",
            document.file_name(),
            selection.len(),
            api_url
        ))
    );
    let envelope = submit_and_aggregate(service.as_ref(), &document, &selection)
        .context("Parse request failed")?;

    let resolver = config.label_resolver();

    if let Some(dir) = &args.export {
        let summary = write_artifacts(&envelope, &resolver, dir, ExportFormat::Both)
            .context("Export failed")?;
        report_export(&summary, dir);
    }

    if args.print || !stdout_is_tty() {
        let lines = comparison_lines(&envelope, tab, &resolver, &theme);
        println!("{}", render_lines(&lines, stdout_is_tty()));
        return Ok(());
    }

    let mut state = ComparisonState::with_envelope(envelope, config.tab_policy());
    state.select_tab(tab);
    let screen = CompareScreen::new(state, resolver, selection)
        .with_submission(Submission { document, service })
        .with_export_dir(config.export_directory())
        .with_max_selected(config.models.max_selected);
    super::run_screen(screen)
}

/// Print where export artifacts went.
pub fn report_export(summary: &ExportSummary, dir: &Path) {
    let theme = current_theme();
    for path in summary.json.iter().chain(summary.csv.iter()) {
        eprintln!("{}", theme.success_text(&format!("Wrote {}", path.display())));
    }
    if summary.csv_skipped {
        eprintln!(
            "{}",
            theme.secondary_text(&format!(
                "No successful results, CSV not written to {}",
                dir.display()
            ))
        );
    }
}
