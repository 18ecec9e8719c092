//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::paths::resolve_config_path;
use crate::cli::Cli;
use crate::commands::prompt::TerminalPrompter;
use lexis_core::config::LexiconConfig;
use lexis_core::db::Lexicon;
use lexis_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Open the lexicon named by `--db`
    pub fn open_lexicon(&self) -> Result<Lexicon> {
        Lexicon::open(&self.cli.db)
    }

    /// Explicit `--config` must exist; the implicit one may be absent
    pub fn load_config(&self) -> Result<LexiconConfig> {
        let path = resolve_config_path(self.cli.config.as_deref(), &self.cli.db);
        if self.cli.config.is_some() {
            LexiconConfig::load(&path)
        } else {
            LexiconConfig::load_or_default(&path)
        }
    }

    pub fn prompter(&self) -> TerminalPrompter {
        TerminalPrompter::new(self.cli.yes, self.cli.quiet, self.cli.format)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("lexis {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A lexicon store for headwords and their meanings.");
        println!();
        println!("Run `lexis --help` for usage information.");
        Ok(())
    }
}
