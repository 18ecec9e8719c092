//! Command implementations for all lexis commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::macros::trace_command;
use lexis_core::error::Result;
use lexis_core::session::Session;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let cli = ctx.cli;
        match self {
            Commands::Init { path } => {
                let path = path.as_deref().unwrap_or(&cli.db);
                commands::init::execute(cli, path)
            }

            Commands::Add(args) => with_session(ctx, |session| {
                commands::entries::save(cli, session, None, args)
            }),

            Commands::Update { id, entry } => with_session(ctx, |session| {
                commands::entries::save(cli, session, Some(*id), entry)
            }),

            Commands::Delete { id } => with_session(ctx, |session| {
                commands::entries::delete(cli, session, *id)
            }),

            Commands::Show { headword, id } => {
                let lexicon = ctx.open_lexicon()?;
                trace_command!(cli, ctx.start, "open_lexicon");
                commands::entries::show(cli, &lexicon, headword.as_deref(), *id)
            }

            Commands::List => {
                let lexicon = ctx.open_lexicon()?;
                commands::list::list(cli, &lexicon)
            }

            Commands::Count => {
                let lexicon = ctx.open_lexicon()?;
                commands::list::count(cli, &lexicon)
            }

            Commands::Search(args) => {
                let lexicon = ctx.open_lexicon()?;
                let config = ctx.load_config()?;
                trace_command!(cli, ctx.start, "open_lexicon");
                commands::search::execute(cli, &lexicon, &config, args)
            }

            Commands::Duplicates(args) => with_session(ctx, |session| {
                commands::duplicates::execute(cli, session, args)
            }),

            Commands::Export(args) => with_session(ctx, |session| {
                commands::transfer::export(cli, session, args)
            }),

            Commands::Import(args) => with_session(ctx, |session| {
                commands::transfer::import(cli, session, args)
            }),
        }
    }
}

/// Open the lexicon and its config, then run `f` inside a prompting session
fn with_session<F>(ctx: &CommandContext, f: F) -> Result<()>
where
    F: FnOnce(&mut Session<'_, commands::prompt::TerminalPrompter>) -> Result<()>,
{
    let mut lexicon = ctx.open_lexicon()?;
    let config = ctx.load_config()?;
    let prompter = ctx.prompter();
    trace_command!(ctx.cli, ctx.start, "open_lexicon");

    let mut session = Session::new(&mut lexicon, &config, &prompter);
    let result = f(&mut session);
    trace_command!(ctx.cli, ctx.start, "execute_command");
    result
}
