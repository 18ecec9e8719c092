use crate::support::{lexis, lexis_at, setup_lexicon};
use predicates::prelude::*;
use rusqlite::Connection;
use tempfile::tempdir;

#[test]
fn test_help_lists_commands() {
    lexis()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: lexis"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("duplicates"));
}

#[test]
fn test_init_creates_both_tables() {
    let (_dir, db) = setup_lexicon();

    let conn = Connection::open(&db).unwrap();
    let tables: Vec<String> = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(tables, vec!["Entry", "Senses"]);
}

#[test]
fn test_init_positional_path() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("other.db");

    lexis()
        .arg("init")
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created lexicon"));
    assert!(db.is_file());
}

#[test]
fn test_init_refuses_existing_file() {
    let (_dir, db) = setup_lexicon();

    lexis_at(&db)
        .arg("init")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_db_from_environment() {
    let (_dir, db) = setup_lexicon();

    lexis()
        .env("LEXIS_DB", &db)
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 entries, 0 meanings"));
}
