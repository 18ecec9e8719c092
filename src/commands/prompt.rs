//! Terminal confirmation and messages

use std::io::{self, BufRead, Write};

use crate::cli::OutputFormat;
use lexis_core::session::Prompter;

/// Asks on stderr and reads y/N from stdin; `--yes` skips the question
pub struct TerminalPrompter {
    assume_yes: bool,
    quiet: bool,
    format: OutputFormat,
}

impl TerminalPrompter {
    pub fn new(assume_yes: bool, quiet: bool, format: OutputFormat) -> Self {
        Self {
            assume_yes,
            quiet,
            format,
        }
    }
}

/// `y` or `yes`, any case
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{} [y/N] ", question);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "cannot read confirmation");
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        // JSON mode prints one document per command instead
        if self.format == OutputFormat::Human && !self.quiet {
            println!("{}", message);
        }
    }
}
