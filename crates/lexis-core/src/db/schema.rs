//! SQLite schema for lexicon files
//!
//! The table layout is fixed for compatibility with existing lexicon files:
//! only `Entry` and `Senses`, no extra columns, no metadata table.

use rusqlite::{params, Connection, Result};

pub const ENTRY_TABLE: &str = "Entry";
pub const SENSES_TABLE: &str = "Senses";

const SCHEMA_SQL: &str = r#"
CREATE TABLE Entry (
    id INTEGER PRIMARY KEY,
    headword TEXT,
    variation TEXT,
    part_of_speech TEXT,
    notes TEXT);
CREATE TABLE Senses (
    id INTEGER PRIMARY KEY,
    entry_id INTEGER,
    meaning TEXT,
    FOREIGN KEY(entry_id) REFERENCES Entry(id));
"#;

/// Create both tables on a fresh connection
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
        params![name],
        |r| r.get(0),
    )?;
    Ok(count > 0)
}

/// Names of required tables that are missing from the connection's database
pub fn missing_tables(conn: &Connection) -> Result<Vec<&'static str>> {
    let mut missing = Vec::new();
    for table in [ENTRY_TABLE, SENSES_TABLE] {
        if !table_exists(conn, table)? {
            missing.push(table);
        }
    }
    Ok(missing)
}
