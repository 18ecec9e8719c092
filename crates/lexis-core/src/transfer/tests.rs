use super::*;
use crate::error::ErrorKind;
use std::fs;
use tempfile::tempdir;

fn sample() -> Lexicon {
    let mut lexicon = Lexicon::open_in_memory().unwrap();
    lexicon
        .create_entry(
            &EntryDraft::new("run", ["to move fast", "to operate"])
                .with_part_of_speech("verb")
                .with_variation("ran"),
        )
        .unwrap();
    lexicon
        .create_entry(&EntryDraft::new("Ökonomie", ["economy, \"the\" system"]).with_notes("loanword"))
        .unwrap();
    lexicon
}

type Comparable = (String, Option<String>, Option<String>, Option<String>, Vec<String>);

/// Entries ignoring ids and meaning order
fn tuples(lexicon: &Lexicon) -> Vec<Comparable> {
    let mut out: Vec<_> = lexicon
        .list_entries()
        .unwrap()
        .into_iter()
        .map(|r| {
            let mut meanings = r.meanings;
            meanings.sort();
            (
                r.entry.headword,
                r.entry.variation,
                r.entry.part_of_speech,
                r.entry.notes,
                meanings,
            )
        })
        .collect();
    out.sort();
    out
}

#[test]
fn test_split_meanings_trims_and_drops_blanks() {
    assert_eq!(
        split_meanings(" a ;; b;;;; ;;c "),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
    assert!(split_meanings("").is_empty());
}

#[test]
fn test_csv_round_trip_into_fresh_lexicon() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let source = sample();

    assert_eq!(export_file(&source, TransferFormat::Csv, &path).unwrap(), 2);

    let mut target = Lexicon::open_in_memory().unwrap();
    let report = import_file(&mut target, TransferFormat::Csv, &path).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.senses, 3);
    assert_eq!(tuples(&target), tuples(&source));
}

#[test]
fn test_json_round_trip_into_fresh_lexicon() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let source = sample();

    export_file(&source, TransferFormat::Json, &path).unwrap();

    let mut target = Lexicon::open_in_memory().unwrap();
    import_file(&mut target, TransferFormat::Json, &path).unwrap();
    assert_eq!(tuples(&target), tuples(&source));
}

#[test]
fn test_csv_layout() {
    let source = sample();
    let mut buf = Vec::new();
    write_csv(&source.export_records().unwrap(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("id,headword,variation,part_of_speech,notes,meanings")
    );
    assert_eq!(lines.next(), Some("1,run,ran,verb,,to move fast;;to operate"));
}

#[test]
fn test_json_layout() {
    let source = sample();
    let mut buf = Vec::new();
    write_json(&source.export_records().unwrap(), &mut buf).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value[0]["headword"], "run");
    assert_eq!(value[0]["notes"], serde_json::Value::Null);
    assert_eq!(value[0]["meanings"][1], "to operate");
    assert_eq!(value[1]["headword"], "Ökonomie");
}

#[test]
fn test_import_ignores_incoming_ids() {
    let mut lexicon = Lexicon::open_in_memory().unwrap();
    lexicon
        .create_entry(&EntryDraft::new("existing", ["kept"]))
        .unwrap();

    let records = read_json(r#"[{"id": 1, "headword": "new", "meanings": ["fresh"]}]"#.as_bytes())
        .unwrap();
    lexicon.import_records(&records).unwrap();

    assert_eq!(lexicon.get_entry(1).unwrap().unwrap().entry.headword, "existing");
    assert_eq!(lexicon.get_entry(2).unwrap().unwrap().entry.headword, "new");
}

#[test]
fn test_import_twice_stores_twice() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let mut lexicon = sample();
    export_file(&lexicon, TransferFormat::Json, &path).unwrap();

    import_file(&mut lexicon, TransferFormat::Json, &path).unwrap();
    assert_eq!(lexicon.count_entries().unwrap(), 4);
    assert_eq!(lexicon.find_duplicate_groups().unwrap().len(), 2);
}

#[test]
fn test_import_skips_unusable_records() {
    let csv = "headword,meanings\n\
               good,first;;second\n\
               ,orphan meaning\n\
               empty,;; ;;\n";
    let records = read_csv(csv.as_bytes()).unwrap();

    let mut lexicon = Lexicon::open_in_memory().unwrap();
    let report = lexicon.import_records(&records).unwrap();

    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped, 2);
    assert_eq!(lexicon.count_senses().unwrap(), 2);
}

#[test]
fn test_json_import_skips_meanings_that_would_split_in_csv() {
    let json = r#"[
        {"headword": "pair", "meanings": ["one;;two"]},
        {"headword": "single", "meanings": ["one; two"]}
    ]"#;
    let records = read_json(json.as_bytes()).unwrap();

    let mut lexicon = Lexicon::open_in_memory().unwrap();
    let report = lexicon.import_records(&records).unwrap();

    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(lexicon.list_headwords().unwrap(), vec!["single"]);
}

#[test]
fn test_csv_reads_columns_by_name() {
    let csv = "meanings,notes,headword\nsmall feline,,kitten\n";
    let records = read_csv(csv.as_bytes()).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].headword, "kitten");
    assert_eq!(records[0].meanings, vec!["small feline"]);
    assert_eq!(records[0].notes, None);
    assert_eq!(records[0].id, None);
}

#[test]
fn test_csv_without_headword_column() {
    let err = read_csv("word,meanings\ncat,feline\n".as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_malformed_json() {
    let err = read_json("{not json".as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);

    let err = read_json(r#"{"headword": "cat"}"#.as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_json_nulls_and_missing_fields() {
    let records = read_json(
        r#"[{"headword": "sun", "variation": null, "meanings": [" star ", ""]},
            {"headword": null, "meanings": null}]"#
            .as_bytes(),
    )
    .unwrap();

    assert_eq!(records[0].meanings, vec!["star"]);
    assert_eq!(records[0].part_of_speech, None);
    assert_eq!(records[1].headword, "");
    assert!(records[1].meanings.is_empty());
}

#[test]
fn test_failed_parse_imports_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"[{"headword": "ok", "meanings": ["fine"]}, {"headword": 5}]"#).unwrap();

    let mut lexicon = Lexicon::open_in_memory().unwrap();
    let err = import_file(&mut lexicon, TransferFormat::Json, &path).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(lexicon.count_entries().unwrap(), 0);
}

#[test]
fn test_format_from_path() {
    assert_eq!(
        TransferFormat::from_path(Path::new("dump.CSV")),
        Some(TransferFormat::Csv)
    );
    assert_eq!(
        TransferFormat::from_path(Path::new("dump.json")),
        Some(TransferFormat::Json)
    );
    assert_eq!(TransferFormat::from_path(Path::new("dump.txt")), None);
}
