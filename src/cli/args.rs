//! Argument groups shared by several subcommands

use std::path::PathBuf;

use clap::Args;

use lexis_core::entry::EntryDraft;
use lexis_core::query::SearchScope;
use lexis_core::transfer::TransferFormat;

use super::parse::{parse_scope, parse_transfer_format};

/// Fields of one entry
#[derive(Args, Debug, Clone)]
pub struct EntryArgs {
    /// Headword
    pub headword: String,

    /// Meaning (repeat for several)
    #[arg(long = "meaning", short = 'm', required = true)]
    pub meanings: Vec<String>,

    /// Alternate form or spelling
    #[arg(long)]
    pub variation: Option<String>,

    /// Part of speech
    #[arg(long = "pos")]
    pub part_of_speech: Option<String>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl EntryArgs {
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            headword: self.headword.clone(),
            variation: self.variation.clone(),
            part_of_speech: self.part_of_speech.clone(),
            notes: self.notes.clone(),
            meanings: self.meanings.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search term; blank lists every headword
    pub term: String,

    /// Field to search: all, headword, part_of_speech, variation, meaning
    #[arg(long, short, value_parser = parse_scope)]
    pub scope: Option<SearchScope>,

    /// Approximate matching
    #[arg(long, conflicts_with = "exact")]
    pub fuzzy: bool,

    /// Substring matching even when the config enables fuzzy search
    #[arg(long)]
    pub exact: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DuplicatesArgs {
    /// Fold each group into its oldest entry, keeping every meaning
    #[arg(long, conflicts_with = "delete")]
    pub merge: bool,

    /// Keep only the oldest entry of each group
    #[arg(long)]
    pub delete: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TransferArgs {
    /// File format: csv or json
    #[arg(id = "transfer_format", value_name = "FORMAT", value_parser = parse_transfer_format)]
    pub format: TransferFormat,

    /// File to read or write
    pub file: PathBuf,
}
