use crate::support::{add_entry, json_output, lexis_at, setup_lexicon};
use predicates::prelude::*;

#[test]
fn test_report_duplicates() {
    let (_dir, db) = setup_lexicon();
    add_entry(&db, "Cat", &["a feline"]);
    add_entry(&db, "dog", &["a canine"]);
    add_entry(&db, "cat ", &["slang for cool"]);

    lexis_at(&db)
        .arg("duplicates")
        .assert()
        .success()
        .stdout("Duplicate headword: cat (appears 2 times) ids=[1, 3]\n");
}

#[test]
fn test_no_duplicates_message() {
    let (_dir, db) = setup_lexicon();
    add_entry(&db, "dog", &["a canine"]);

    lexis_at(&db)
        .arg("duplicates")
        .assert()
        .success()
        .stdout(predicate::str::contains("No duplicate headwords found."));
}

#[test]
fn test_merge_duplicates() {
    let (dir, db) = setup_lexicon();
    add_entry(&db, "Cat", &["a feline"]);
    add_entry(&db, "cat ", &["slang for cool"]);

    let report = json_output(lexis_at(&db).args(["--yes", "--format", "json", "duplicates", "--merge"]));
    assert_eq!(report["entries_removed"], 1);
    assert_eq!(report["senses_reassigned"], 1);

    let json = json_output(lexis_at(&db).args(["--format", "json", "show", "--id", "1"]));
    assert_eq!(json["headword"], "Cat");
    assert_eq!(
        json["meanings"],
        serde_json::json!(["a feline", "slang for cool"])
    );
    lexis_at(&db).args(["show", "--id", "2"]).assert().code(3);

    // destructive operations leave a backup beside the lexicon
    let backups = std::fs::read_dir(dir.path().join("backups")).unwrap().count();
    assert_eq!(backups, 1);
}

#[test]
fn test_delete_duplicates_keeps_oldest() {
    let (_dir, db) = setup_lexicon();
    add_entry(&db, "Dog", &["canine"]);
    add_entry(&db, "dog", &["to follow"]);

    lexis_at(&db)
        .args(["--yes", "duplicates", "--delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 duplicate entries"));

    lexis_at(&db)
        .arg("list")
        .assert()
        .success()
        .stdout("Dog\n");
}

#[test]
fn test_declined_merge() {
    let (_dir, db) = setup_lexicon();
    add_entry(&db, "Cat", &["a feline"]);
    add_entry(&db, "cat", &["slang for cool"]);

    lexis_at(&db)
        .args(["duplicates", "--merge"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    lexis_at(&db)
        .arg("list")
        .assert()
        .success()
        .stdout("Cat\ncat\n");
}
