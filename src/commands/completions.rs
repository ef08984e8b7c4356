//! Completions command handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io::{self, Write};

/// Write a completion script for `shell` to stdout.
pub fn handle<C: CommandFactory>(shell: CompletionShell) -> Result<()> {
    let mut out = io::stdout();
    write_completions::<C>(shell, &mut out)?;
    out.flush()?;
    Ok(())
}

pub(crate) fn write_completions<C: CommandFactory>(
    shell: CompletionShell,
    out: &mut dyn Write,
) -> Result<()> {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "rcmp", out);
    Ok(())
}
