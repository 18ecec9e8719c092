//! `lexis add`, `update`, `delete` and `show`

use crate::cli::format::output_by_format_result;
use crate::cli::{Cli, EntryArgs};
use crate::commands::format::{cancelled, print_json, print_json_status};
use lexis_core::db::Lexicon;
use lexis_core::entry::EntryRecord;
use lexis_core::error::{LexisError, Result};
use lexis_core::session::{Prompter, Session};
use serde_json::json;

/// Create an entry, or replace entry `id`
pub fn save<P: Prompter>(
    cli: &Cli,
    session: &mut Session<'_, P>,
    id: Option<i64>,
    args: &EntryArgs,
) -> Result<()> {
    let saved = session.save(id, &args.to_draft())?;

    output_by_format_result!(cli.format,
        json => print_json_status("ok", None, &[("id", json!(saved))]),
        human => {}
    )
}

pub fn delete<P: Prompter>(cli: &Cli, session: &mut Session<'_, P>, id: i64) -> Result<()> {
    let senses = cancelled(session.delete_entry(id)?, &format!("delete entry {}", id))?;

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            None,
            &[("id", json!(id)), ("senses_removed", json!(senses))],
        ),
        human => {}
    )
}

pub fn show(cli: &Cli, lexicon: &Lexicon, headword: Option<&str>, id: Option<i64>) -> Result<()> {
    let record = match (id, headword) {
        (Some(id), _) => lexicon
            .get_entry(id)?
            .ok_or_else(|| LexisError::not_found("entry", id))?,
        (None, Some(headword)) => lexicon
            .get_entry_by_headword(headword)?
            .ok_or_else(|| LexisError::not_found("headword", headword))?,
        (None, None) => {
            lexis_core::bail_invalid!("show", "a headword or --id is required")
        }
    };

    output_by_format_result!(cli.format,
        json => print_json(&record),
        human => {
            print_record(&record);
        }
    )
}

fn print_record(record: &EntryRecord) {
    let entry = &record.entry;
    println!("{} (id {})", entry.headword, entry.id);
    if let Some(pos) = &entry.part_of_speech {
        println!("  part of speech: {}", pos);
    }
    if let Some(variation) = &entry.variation {
        println!("  variation: {}", variation);
    }
    if let Some(notes) = &entry.notes {
        println!("  notes: {}", notes);
    }
    for (n, meaning) in record.meanings.iter().enumerate() {
        println!("  {}. {}", n + 1, meaning);
    }
}
