use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension};

use crate::entry::{Entry, EntryRecord, Sense};
use crate::error::{LexisError, Result};

const ENTRY_COLUMNS: &str = "id, headword, variation, part_of_speech, notes";

/// Map a row selected with [`ENTRY_COLUMNS`] to an [`Entry`]
fn entry_from_row(row: &rusqlite::Row) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        headword: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        variation: row.get(2)?,
        part_of_speech: row.get(3)?,
        notes: row.get(4)?,
    })
}

/// Meanings of one entry in sense-id order
fn load_meanings(conn: &Connection, entry_id: i64) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare_cached("SELECT meaning FROM Senses WHERE entry_id = ?1 ORDER BY id")
        .map_err(|e| LexisError::db_operation("prepare meanings query", e))?;

    let rows = stmt
        .query_map(params![entry_id], |row| {
            row.get::<_, Option<String>>(0).map(Option::unwrap_or_default)
        })
        .map_err(|e| LexisError::db_operation("query meanings", e))?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| LexisError::db_operation("read meaning", e))
}

impl crate::db::Lexicon {
    /// All headwords, alphabetically ascending, one per entry
    pub fn list_headwords(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT headword FROM Entry ORDER BY headword, id")
            .map_err(|e| LexisError::db_operation("prepare headword list", e))?;

        let rows = stmt
            .query_map([], |row| {
                row.get::<_, Option<String>>(0).map(Option::unwrap_or_default)
            })
            .map_err(|e| LexisError::db_operation("list headwords", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| LexisError::db_operation("read headword", e))
    }

    /// Exact headword lookup; with duplicate headwords the lowest id wins
    pub fn get_entry_by_headword(&self, headword: &str) -> Result<Option<EntryRecord>> {
        let entry = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM Entry WHERE headword = ?1 ORDER BY id LIMIT 1",
                    ENTRY_COLUMNS
                ),
                params![headword],
                entry_from_row,
            )
            .optional()
            .map_err(|e| LexisError::db_operation(&format!("look up '{}'", headword), e))?;

        self.with_meanings(entry)
    }

    /// Lookup by id
    pub fn get_entry(&self, id: i64) -> Result<Option<EntryRecord>> {
        let entry = self
            .conn
            .query_row(
                &format!("SELECT {} FROM Entry WHERE id = ?1", ENTRY_COLUMNS),
                params![id],
                entry_from_row,
            )
            .optional()
            .map_err(|e| LexisError::db_operation(&format!("look up entry {}", id), e))?;

        self.with_meanings(entry)
    }

    fn with_meanings(&self, entry: Option<Entry>) -> Result<Option<EntryRecord>> {
        match entry {
            Some(entry) => {
                let meanings = load_meanings(&self.conn, entry.id)?;
                Ok(Some(EntryRecord { entry, meanings }))
            }
            None => Ok(None),
        }
    }

    pub fn count_entries(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM Entry", [], |r| r.get(0))
            .map_err(|e| LexisError::db_operation("count entries", e))
    }

    pub fn count_senses(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM Senses", [], |r| r.get(0))
            .map_err(|e| LexisError::db_operation("count senses", e))
    }

    /// Senses whose `entry_id` names no existing entry
    pub fn count_orphaned_senses(&self) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM Senses s LEFT JOIN Entry e ON e.id = s.entry_id WHERE e.id IS NULL",
                [],
                |r| r.get(0),
            )
            .map_err(|e| LexisError::db_operation("count orphaned senses", e))
    }

    /// Every sense attached to an entry, ordered by sense id
    pub fn list_senses(&self) -> Result<Vec<Sense>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, entry_id, meaning FROM Senses WHERE entry_id IS NOT NULL ORDER BY id")
            .map_err(|e| LexisError::db_operation("prepare sense list", e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Sense {
                    id: row.get(0)?,
                    entry_id: row.get(1)?,
                    meaning: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                })
            })
            .map_err(|e| LexisError::db_operation("list senses", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| LexisError::db_operation("read sense", e))
    }

    /// Every entry with its meanings, ordered by id
    pub fn list_entries(&self) -> Result<Vec<EntryRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT entry_id, meaning FROM Senses ORDER BY entry_id, id")
            .map_err(|e| LexisError::db_operation("prepare sense scan", e))?;
        let sense_rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, Option<i64>>(0)?,
                    row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                ))
            })
            .map_err(|e| LexisError::db_operation("scan senses", e))?;

        let mut meanings_by_entry: HashMap<i64, Vec<String>> = HashMap::new();
        for row in sense_rows {
            let (entry_id, meaning) = row.map_err(|e| LexisError::db_operation("read sense", e))?;
            if let Some(entry_id) = entry_id {
                meanings_by_entry.entry(entry_id).or_default().push(meaning);
            }
        }

        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM Entry ORDER BY id", ENTRY_COLUMNS))
            .map_err(|e| LexisError::db_operation("prepare entry scan", e))?;
        let entries = stmt
            .query_map([], entry_from_row)
            .map_err(|e| LexisError::db_operation("scan entries", e))?;

        let mut records = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| LexisError::db_operation("read entry", e))?;
            let meanings = meanings_by_entry.remove(&entry.id).unwrap_or_default();
            records.push(EntryRecord { entry, meanings });
        }

        if !meanings_by_entry.is_empty() {
            tracing::warn!(
                orphaned_entries = meanings_by_entry.len(),
                "senses reference entries that no longer exist"
            );
        }

        Ok(records)
    }
}
