//! CLI commands for lexis

pub mod dispatch;
pub mod duplicates;
pub mod entries;
pub mod format;
pub mod init;
pub mod list;
pub mod prompt;
pub mod search;
pub mod transfer;
