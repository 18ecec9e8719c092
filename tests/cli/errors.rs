use crate::support::{lexis, lexis_at, setup_lexicon};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_lexicon() {
    let dir = tempdir().unwrap();

    lexis_at(&dir.path().join("absent.db"))
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("lexicon not found"));
}

#[test]
fn test_file_that_is_not_a_lexicon() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("plain.db");
    fs::write(&db, "just some text, definitely not sqlite").unwrap();

    lexis_at(&db)
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not a valid lexicon"));
}

#[test]
fn test_json_error_envelope() {
    let (_dir, db) = setup_lexicon();

    let output = lexis_at(&db)
        .args(["--format", "json", "show", "nothing"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "not_found");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_json_envelope_for_bad_arguments() {
    let output = lexis()
        .args(["--format", "json", "search"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_argument");
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();

    lexis_at(&dir.path().join("absent.db"))
        .args(["--quiet", "list"])
        .assert()
        .code(3)
        .stderr("");
}
