use crate::support::{add_entry, json_output, lexis_at, setup_lexicon};
use predicates::prelude::*;

#[test]
fn test_add_and_show() {
    let (_dir, db) = setup_lexicon();

    lexis_at(&db)
        .args(["add", "run", "-m", "to move fast", "-m", "to operate"])
        .args(["--pos", "verb", "--variation", "ran"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 'run' (id 1)"));

    lexis_at(&db)
        .args(["show", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("run (id 1)"))
        .stdout(predicate::str::contains("part of speech: verb"))
        .stdout(predicate::str::contains("1. to move fast"))
        .stdout(predicate::str::contains("2. to operate"));
}

#[test]
fn test_add_requires_meaning_text() {
    let (_dir, db) = setup_lexicon();

    lexis_at(&db)
        .args(["add", "word", "-m", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least one meaning"));

    lexis_at(&db)
        .args(["add", "", "-m", "a meaning"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("headword is required"));
}

#[test]
fn test_show_json() {
    let (_dir, db) = setup_lexicon();
    add_entry(&db, "cat", &["a feline"]);

    let json = json_output(lexis_at(&db).args(["--format", "json", "show", "--id", "1"]));
    assert_eq!(json["headword"], "cat");
    assert_eq!(json["variation"], serde_json::Value::Null);
    assert_eq!(json["meanings"], serde_json::json!(["a feline"]));
}

#[test]
fn test_update_replaces_meanings() {
    let (_dir, db) = setup_lexicon();
    let id = add_entry(&db, "tree", &["plant", "diagram"]);

    lexis_at(&db)
        .args(["update", &id.to_string(), "Tree", "-m", "woody plant"])
        .assert()
        .success();

    let json = json_output(lexis_at(&db).args(["--format", "json", "show", "Tree"]));
    assert_eq!(json["meanings"], serde_json::json!(["woody plant"]));
}

#[test]
fn test_delete_with_yes() {
    let (_dir, db) = setup_lexicon();
    let id = add_entry(&db, "sea", &["salt water"]);

    lexis_at(&db)
        .args(["--yes", "delete", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry 1 (1 meanings)"));

    lexis_at(&db)
        .args(["show", "sea"])
        .assert()
        .code(3);
}

#[test]
fn test_declined_delete_keeps_entry() {
    let (_dir, db) = setup_lexicon();
    add_entry(&db, "sea", &["salt water"]);

    lexis_at(&db)
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    lexis_at(&db).args(["show", "sea"]).assert().success();
}

#[test]
fn test_delete_missing_entry() {
    let (_dir, db) = setup_lexicon();

    lexis_at(&db)
        .args(["--yes", "delete", "42"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("entry not found: 42"));
}

#[test]
fn test_list_and_count() {
    let (_dir, db) = setup_lexicon();
    add_entry(&db, "pear", &["fruit"]);
    add_entry(&db, "apple", &["fruit", "company"]);

    lexis_at(&db)
        .arg("list")
        .assert()
        .success()
        .stdout("apple\npear\n");

    let json = json_output(lexis_at(&db).args(["--format", "json", "count"]));
    assert_eq!(json["entries"], 2);
    assert_eq!(json["senses"], 3);
}
