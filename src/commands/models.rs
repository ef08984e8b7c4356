//! Models command handler

use anyhow::{Context, Result};
use unicode_width::UnicodeWidthStr;

use resume_compare::selection::MODEL_OPTIONS;
use resume_compare::theme::current_theme;
use resume_compare::{Config, LabelResolver, SelectionSet};

/// List the model catalog, marking the default selection.
pub fn handle() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let defaults = config
        .default_selection()
        .context("Invalid [models] default in config")?;
    let theme = current_theme();

    println!("{}", theme.accent_text("Available models:"));
    for row in catalog_rows(&config.label_resolver(), &defaults) {
        println!("  {}", theme.primary_text(&row));
    }
    println!();
    println!(
        "{}",
        theme.secondary_text(&format!(
            "* selected by default | the picker allows up to {} models",
            config.models.max_selected
        ))
    );
    Ok(())
}

/// One line per catalog entry: marker, identifier, label and badge.
pub fn catalog_rows(resolver: &LabelResolver, defaults: &SelectionSet) -> Vec<String> {
    let width = MODEL_OPTIONS
        .iter()
        .map(|o| o.id.width())
        .max()
        .unwrap_or(0);
    MODEL_OPTIONS
        .iter()
        .filter_map(|option| {
            let id = option.backend_id().ok()?;
            let marker = if defaults.contains(&id) { '*' } else { ' ' };
            let resolved = resolver.resolve(&id);
            let badge = option
                .badge
                .map(|b| format!(" [{}]", b))
                .unwrap_or_default();
            let padding = " ".repeat(width.saturating_sub(option.id.width()));
            Some(format!(
                "{} {}{}  {} ({}){}",
                marker, option.id, padding, resolved.label, resolved.provider_display, badge
            ))
        })
        .collect()
}
