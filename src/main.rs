//! Resume Compare (rcmp) - CLI entry point

mod cli;
mod commands;

use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};
use commands::parse::ParseArgs;

/// Version string: crate version, plus the git commit for dev builds.
pub(crate) fn version_string() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !sha.is_empty() => {
            let short = sha.get(..7).unwrap_or(sha);
            format!("{} ({})", env!("CARGO_PKG_VERSION"), short)
        }
        _ => env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    resume_compare::logging::init(cli.verbose);

    match cli.command {
        Commands::Parse {
            file,
            models,
            api_url,
            print,
            tab,
            export,
        } => commands::parse::handle(ParseArgs {
            file,
            models,
            api_url,
            print,
            tab,
            export,
        }),
        Commands::View { file, tab, print } => commands::view::handle(&file, &tab, print),
        Commands::Export { file, out, format } => {
            commands::export::handle(&file, out.as_deref(), format)
        }
        Commands::Models => commands::models::handle(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
