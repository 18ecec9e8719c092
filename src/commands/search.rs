//! `lexis search` command
//!
//! Scope and fuzziness come from the flags, falling back to the `[search]`
//! section of the configuration.

use serde::Serialize;

use crate::cli::format::output_by_format_result;
use crate::cli::{Cli, SearchArgs};
use crate::commands::format::print_json;
use lexis_core::config::LexiconConfig;
use lexis_core::db::Lexicon;
use lexis_core::error::Result;
use lexis_core::query::{SearchQuery, SearchScope};

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    term: &'a str,
    scope: SearchScope,
    fuzzy: bool,
    results: &'a [String],
}

/// Build the query from flags and config defaults
fn build_query(args: &SearchArgs, config: &LexiconConfig) -> SearchQuery {
    let fuzzy = if args.exact {
        false
    } else {
        args.fuzzy || config.search.fuzzy
    };
    SearchQuery::new(args.term.as_str())
        .with_scope(args.scope.unwrap_or(config.search.default_scope))
        .fuzzy(fuzzy)
}

pub fn execute(
    cli: &Cli,
    lexicon: &Lexicon,
    config: &LexiconConfig,
    args: &SearchArgs,
) -> Result<()> {
    let query = build_query(args, config);
    let results = lexicon.search(&query)?;

    output_by_format_result!(cli.format,
        json => print_json(&SearchOutput {
            term: &query.term,
            scope: query.scope,
            fuzzy: query.fuzzy,
            results: &results,
        }),
        human => {
            if results.is_empty() && !cli.quiet {
                eprintln!("No matches.");
            }
            for headword in &results {
                println!("{}", headword);
            }
        }
    )
}
