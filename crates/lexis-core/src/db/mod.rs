//! SQLite lexicon store
//!
//! A [`Lexicon`] is an explicit handle over one lexicon file. Every store,
//! query, deduplication and transfer operation goes through it; there is no
//! ambient connection state.

mod duplicates;
mod entries;
mod ids;
mod schema;
mod search;
mod transfer;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::{LexisError, Result};
use ids::IdAllocator;

pub use duplicates::{DedupReport, DuplicateGroup};
pub use schema::{create_schema, missing_tables, ENTRY_TABLE, SENSES_TABLE};

/// Handle over an open lexicon
#[derive(Debug)]
pub struct Lexicon {
    conn: Connection,
    path: Option<PathBuf>,
    ids: IdAllocator,
}

impl Lexicon {
    /// Create a new lexicon file with an empty schema.
    ///
    /// Refuses to touch an existing file.
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(LexisError::already_exists(
                "lexicon",
                path.display().to_string(),
            ));
        }

        let conn = Connection::open(path).map_err(|e| {
            LexisError::db_operation(&format!("create lexicon at {}", path.display()), e)
        })?;
        create_schema(&conn).map_err(|e| LexisError::db_operation("create lexicon schema", e))?;

        tracing::info!("created lexicon");
        Self::from_connection(conn, Some(path.to_path_buf()))
    }

    /// Open an existing lexicon file.
    ///
    /// The file is accepted only if both the `Entry` and `Senses` tables exist.
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(LexisError::not_found("lexicon", path.display().to_string()));
        }

        let conn = Connection::open(path).map_err(|e| {
            LexisError::db_operation(&format!("open lexicon at {}", path.display()), e)
        })?;

        let missing = missing_tables(&conn).map_err(|e| LexisError::InvalidLexicon {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !missing.is_empty() {
            return Err(LexisError::InvalidLexicon {
                path: path.to_path_buf(),
                reason: format!("missing table(s): {}", missing.join(", ")),
            });
        }

        Self::from_connection(conn, Some(path.to_path_buf()))
    }

    /// Fresh lexicon held in memory
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| LexisError::db_operation("open in-memory lexicon", e))?;
        create_schema(&conn).map_err(|e| LexisError::db_operation("create lexicon schema", e))?;
        Self::from_connection(conn, None)
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        let ids = IdAllocator::load(&conn)?;
        Ok(Lexicon { conn, path, ids })
    }

    /// Backing file, `None` for in-memory lexicons
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests;
