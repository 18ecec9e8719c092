//! `lexis export` and `lexis import`

use lexis_core::transfer::TransferFormat;

use crate::cli::format::output_by_format_result;
use crate::cli::{Cli, TransferArgs};
use crate::commands::format::{cancelled, print_json, print_json_status};
use lexis_core::error::Result;
use lexis_core::session::{Prompter, Session};
use serde_json::json;

pub fn export<P: Prompter>(
    cli: &Cli,
    session: &mut Session<'_, P>,
    args: &TransferArgs,
) -> Result<()> {
    let records = match args.format {
        TransferFormat::Csv => session.export_csv(&args.file)?,
        TransferFormat::Json => session.export_json(&args.file)?,
    };

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            None,
            &[
                ("format", json!(args.format.to_string())),
                ("file", json!(args.file.display().to_string())),
                ("records", json!(records)),
            ],
        ),
        human => {}
    )
}

pub fn import<P: Prompter>(
    cli: &Cli,
    session: &mut Session<'_, P>,
    args: &TransferArgs,
) -> Result<()> {
    let outcome = match args.format {
        TransferFormat::Csv => session.import_csv(&args.file)?,
        TransferFormat::Json => session.import_json(&args.file)?,
    };
    let report = cancelled(outcome, &format!("import {}", args.file.display()))?;

    output_by_format_result!(cli.format,
        json => print_json(&report),
        human => {}
    )
}
