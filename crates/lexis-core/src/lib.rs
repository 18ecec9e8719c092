//! Lexis Core Library
//!
//! Lexicon storage, search, duplicate consolidation and import/export for
//! the Lexis dictionary tool.

pub mod backup;
pub mod config;
pub mod db;
pub mod entry;
pub mod error;
pub mod logging;
pub mod query;
pub mod session;
pub mod similarity;
pub mod transfer;
