//! Command dispatch logic for lexis

use std::time::Instant;

use crate::cli::Cli;
use lexis_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    debug!(db = %cli.db.display(), elapsed = ?start.elapsed(), "resolve_lexicon");

    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
