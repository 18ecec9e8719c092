use crate::support::{add_entry, json_output, lexis_at, setup_lexicon};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_exact_meaning_search() {
    let (_dir, db) = setup_lexicon();
    add_entry(&db, "sprint", &["to run fast"]);
    add_entry(&db, "walk", &["to move slowly"]);

    lexis_at(&db)
        .args(["search", "run", "--scope", "meaning"])
        .assert()
        .success()
        .stdout("sprint\n");
}

#[test]
fn test_fuzzy_headword_search() {
    let (_dir, db) = setup_lexicon();
    add_entry(&db, "cat", &["a feline"]);
    add_entry(&db, "dog", &["a canine"]);

    lexis_at(&db)
        .args(["search", "kat", "--scope", "headword", "--fuzzy"])
        .assert()
        .success()
        .stdout("cat\n");

    lexis_at(&db)
        .args(["search", "xyz", "--scope", "headword", "--fuzzy"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No matches."));
}

#[test]
fn test_search_json_output() {
    let (_dir, db) = setup_lexicon();
    add_entry(&db, "Runway", &["strip for aircraft"]);

    let json = json_output(lexis_at(&db).args(["--format", "json", "search", "RUN"]));
    assert_eq!(json["scope"], "all");
    assert_eq!(json["fuzzy"], false);
    assert_eq!(json["results"], serde_json::json!(["Runway"]));
}

#[test]
fn test_search_defaults_from_config() {
    let (dir, db) = setup_lexicon();
    add_entry(&db, "cat", &["a feline"]);
    fs::write(
        dir.path().join("lexis.toml"),
        "[search]\ndefault_scope = \"headword\"\nfuzzy = true\n",
    )
    .unwrap();

    lexis_at(&db)
        .args(["search", "kat"])
        .assert()
        .success()
        .stdout("cat\n");

    lexis_at(&db)
        .args(["search", "kat", "--exact"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_unknown_scope_is_usage_error() {
    let (_dir, db) = setup_lexicon();

    lexis_at(&db)
        .args(["search", "cat", "--scope", "etymology"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown scope"));
}
