//! CLI argument parsing for lexis
//!
//! Global flags: --db, --config, --format, --quiet, --verbose, --yes

pub mod args;
pub mod format;
pub mod output;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{DuplicatesArgs, EntryArgs, SearchArgs, TransferArgs};
pub use output::OutputFormat;

/// Lexis - headwords, meanings, search and deduplication in a SQLite lexicon
#[derive(Parser, Debug)]
#[command(name = "lexis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Lexicon file
    #[arg(long, global = true, env = "LEXIS_DB", default_value = paths::DEFAULT_LEXICON)]
    pub db: PathBuf,

    /// Configuration file (default: lexis.toml next to the lexicon)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `info`, `lexis_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Answer yes to every confirmation
    #[arg(long, short, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new, empty lexicon file
    Init {
        /// Where to create it (default: --db)
        path: Option<PathBuf>,
    },

    /// Add an entry
    Add(EntryArgs),

    /// Replace an entry's fields and meanings
    Update {
        /// Entry id
        id: i64,

        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Delete an entry and its meanings
    Delete {
        /// Entry id
        id: i64,
    },

    /// Show one entry with its meanings
    Show {
        /// Exact headword; with duplicates the oldest entry is shown
        #[arg(required_unless_present = "id")]
        headword: Option<String>,

        /// Look up by id instead
        #[arg(long, conflicts_with = "headword")]
        id: Option<i64>,
    },

    /// List all headwords alphabetically
    List,

    /// Count entries and meanings
    Count,

    /// Search headwords
    Search(SearchArgs),

    /// Report duplicate headwords, optionally merging or deleting them
    Duplicates(DuplicatesArgs),

    /// Export every entry to a file
    Export(TransferArgs),

    /// Import entries from a file
    Import(TransferArgs),
}
