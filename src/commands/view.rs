//! View command handler

use anyhow::{Context, Result};
use std::path::Path;

use resume_compare::theme::current_theme;
use resume_compare::tui::CompareScreen;
use resume_compare::view::panel::comparison_lines;
use resume_compare::{ComparisonState, Config, ResponseEnvelope, SelectionSet};

use super::{load_envelope, parse_tab, render_lines, stdout_is_tty};

/// Selection shown for a saved envelope: the models it contains, or the
/// configured defaults when nothing succeeded.
pub fn selection_for(envelope: &ResponseEnvelope, config: &Config) -> Result<SelectionSet> {
    let ids = envelope.entries().iter().map(|e| e.id.clone());
    match SelectionSet::from_ids(ids) {
        Ok(selection) => Ok(selection),
        Err(_) => config
            .default_selection()
            .context("Invalid [models] default in config"),
    }
}

/// Open a saved envelope in the comparison screen, or print it.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, tab: &str, print: bool) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let tab = parse_tab(tab)?;
    let envelope = load_envelope(file)?;
    let resolver = config.label_resolver();

    if print || !stdout_is_tty() {
        let lines = comparison_lines(&envelope, tab, &resolver, &current_theme());
        println!("{}", render_lines(&lines, stdout_is_tty()));
        return Ok(());
    }

    let selection = selection_for(&envelope, &config)?;
    let mut state = ComparisonState::with_envelope(envelope, config.tab_policy());
    state.select_tab(tab);
    let screen = CompareScreen::new(state, resolver, selection)
        .with_export_dir(config.export_directory())
        .with_max_selected(config.models.max_selected);
    super::run_screen(screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_follows_envelope_entries() {
        let envelope = ResponseEnvelope::from_json(
            r#"{"results": [{"provider": "gemini", "model_name": "gemini-3-pro-preview", "resume": {}}]}"#,
        )
        .unwrap();
        let selection = selection_for(&envelope, &Config::default()).unwrap();
        assert_eq!(selection.to_query_value(), "gemini:gemini-3-pro-preview");
    }

    #[test]
    fn empty_envelope_falls_back_to_defaults() {
        let envelope = ResponseEnvelope::default();
        let selection = selection_for(&envelope, &Config::default()).unwrap();
        assert_eq!(selection, SelectionSet::defaults());
    }
}
