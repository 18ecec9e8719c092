//! Row id assignment
//!
//! `INTEGER PRIMARY KEY` alone lets SQLite hand out `MAX(id) + 1`, which
//! recycles the id of a deleted last row. Ids are assigned explicitly from a
//! high-water mark instead, so an id is never reused while the lexicon is open.

use rusqlite::Connection;

use crate::error::{LexisError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IdAllocator {
    last_entry: i64,
    last_sense: i64,
}

impl IdAllocator {
    pub(crate) fn load(conn: &Connection) -> Result<Self> {
        let max_id = |table: &str| -> Result<i64> {
            conn.query_row(
                &format!("SELECT COALESCE(MAX(id), 0) FROM {}", table),
                [],
                |r| r.get(0),
            )
            .map_err(|e| LexisError::db_operation(&format!("read max id of {}", table), e))
        };

        Ok(IdAllocator {
            last_entry: max_id(super::ENTRY_TABLE)?,
            last_sense: max_id(super::SENSES_TABLE)?,
        })
    }

    pub(crate) fn next_entry(&mut self) -> i64 {
        self.last_entry += 1;
        self.last_entry
    }

    pub(crate) fn next_sense(&mut self) -> i64 {
        self.last_sense += 1;
        self.last_sense
    }
}
