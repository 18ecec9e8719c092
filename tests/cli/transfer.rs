use crate::support::{add_entry, json_output, lexis_at, setup_lexicon};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_csv_export_and_import() {
    let (dir, db) = setup_lexicon();
    add_entry(&db, "run", &["to move fast", "to operate"]);
    add_entry(&db, "Ökonomie", &["economy"]);

    let file = dir.path().join("out.csv");
    lexis_at(&db)
        .args(["export", "csv"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 entries"));

    let text = fs::read_to_string(&file).unwrap();
    assert!(text.starts_with("id,headword,variation,part_of_speech,notes,meanings\n"));
    assert!(text.contains("to move fast;;to operate"));

    let fresh = dir.path().join("fresh.db");
    lexis_at(&fresh).arg("init").assert().success();
    lexis_at(&fresh)
        .args(["--yes", "import", "csv"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 entries (3 meanings)"));

    let json = json_output(lexis_at(&fresh).args(["--format", "json", "show", "run"]));
    assert_eq!(
        json["meanings"],
        serde_json::json!(["to move fast", "to operate"])
    );
}

#[test]
fn test_json_round_trip() {
    let (dir, db) = setup_lexicon();
    add_entry(&db, "sun", &["star"]);

    let file = dir.path().join("out.json");
    lexis_at(&db)
        .args(["export", "json"])
        .arg(&file)
        .assert()
        .success();

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(exported[0]["meanings"], serde_json::json!(["star"]));

    let report = json_output(
        lexis_at(&db)
            .args(["--yes", "--format", "json", "import", "json"])
            .arg(&file),
    );
    assert_eq!(report["imported"], 1);

    // imports never deduplicate
    lexis_at(&db)
        .arg("duplicates")
        .assert()
        .success()
        .stdout(predicate::str::contains("appears 2 times"));
}

#[test]
fn test_import_skips_blank_records() {
    let (dir, db) = setup_lexicon();
    let file = dir.path().join("in.csv");
    fs::write(&file, "headword,meanings\ngood,first\n,orphan\nempty,\n").unwrap();

    let report = json_output(
        lexis_at(&db)
            .args(["--yes", "--format", "json", "import", "csv"])
            .arg(&file),
    );
    assert_eq!(report["imported"], 1);
    assert_eq!(report["skipped"], 2);
}

#[test]
fn test_malformed_json_imports_nothing() {
    let (dir, db) = setup_lexicon();
    let file = dir.path().join("bad.json");
    fs::write(&file, "{\"headword\": \"cat\"").unwrap();

    lexis_at(&db)
        .args(["--yes", "import", "json"])
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("malformed json input"));

    lexis_at(&db)
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 entries"));
}
