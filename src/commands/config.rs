//! Config subcommands handler

use anyhow::{Context, Result};

use resume_compare::config::docs::annotate_config;
use resume_compare::theme::current_theme;
use resume_compare::Config;

/// Render a config as TOML with documentation comments.
pub fn annotated_toml(config: &Config) -> Result<String> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    Ok(annotate_config(&toml_str))
}

/// Show current configuration as TOML with inline documentation comments.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&annotated_toml(&config)?));
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;

    // Surface mistakes right away instead of on the next parse
    Config::load_from(&config_path).context("Edited config is invalid")?;
    Ok(())
}
