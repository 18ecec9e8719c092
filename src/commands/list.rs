//! `lexis list` and `lexis count`

use crate::cli::format::output_by_format_result;
use crate::cli::Cli;
use crate::commands::format::print_json;
use lexis_core::db::Lexicon;
use lexis_core::error::Result;
use serde_json::json;

pub fn list(cli: &Cli, lexicon: &Lexicon) -> Result<()> {
    let headwords = lexicon.list_headwords()?;

    output_by_format_result!(cli.format,
        json => print_json(&headwords),
        human => {
            for headword in &headwords {
                println!("{}", headword);
            }
        }
    )
}

pub fn count(cli: &Cli, lexicon: &Lexicon) -> Result<()> {
    let entries = lexicon.count_entries()?;
    let senses = lexicon.count_senses()?;
    let orphaned = lexicon.count_orphaned_senses()?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "entries": entries,
            "senses": senses,
            "orphaned_senses": orphaned,
        })),
        human => {
            println!("{} entries, {} meanings", entries, senses);
            if orphaned > 0 {
                println!("{} meanings belong to no entry", orphaned);
            }
        }
    )
}
