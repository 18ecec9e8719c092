//! `lexis duplicates` command - report, merge or delete duplicate headwords

use crate::cli::format::output_by_format_result;
use crate::cli::{Cli, DuplicatesArgs};
use crate::commands::format::{cancelled, print_json};
use lexis_core::error::Result;
use lexis_core::session::{Prompter, Session};

pub fn execute<P: Prompter>(
    cli: &Cli,
    session: &mut Session<'_, P>,
    args: &DuplicatesArgs,
) -> Result<()> {
    if args.merge || args.delete {
        let report = if args.merge {
            cancelled(session.merge_duplicates()?, "merge duplicates")?
        } else {
            cancelled(session.delete_duplicates()?, "delete duplicates")?
        };

        return output_by_format_result!(cli.format,
            json => print_json(&report),
            human => {}
        );
    }

    // Human output comes from the session's notifications
    let groups = session.show_duplicates()?;
    output_by_format_result!(cli.format,
        json => print_json(&groups),
        human => {}
    )
}
