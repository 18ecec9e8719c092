//! `lexis init` command - create a new lexicon file

use std::path::Path;

use crate::cli::format::output_by_format_result;
use crate::cli::Cli;
use crate::commands::format::print_json_status;
use lexis_core::db::Lexicon;
use lexis_core::error::Result;

/// Execute the init command; refuses to overwrite an existing file
pub fn execute(cli: &Cli, path: &Path) -> Result<()> {
    Lexicon::create(path)?;

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            Some("Lexicon created"),
            &[("lexicon", serde_json::json!(path.display().to_string()))],
        ),
        human => {
            if !cli.quiet {
                println!("Created lexicon at {}", path.display());
            }
        }
    )
}
