use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for lexis with no ambient lexicon or log settings
pub fn lexis() -> Command {
    let mut cmd = cargo_bin_cmd!("lexis");
    cmd.env_remove("LEXIS_DB")
        .env_remove("LEXIS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Command already pointed at `db`
pub fn lexis_at(db: &Path) -> Command {
    let mut cmd = lexis();
    cmd.arg("--db").arg(db);
    cmd
}

/// Temp dir holding a freshly initialized `words.db`
pub fn setup_lexicon() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("words.db");
    lexis_at(&db).arg("init").assert().success();
    (dir, db)
}

/// Add an entry and return its id
pub fn add_entry(db: &Path, headword: &str, meanings: &[&str]) -> i64 {
    let mut cmd = lexis_at(db);
    cmd.args(["--format", "json", "add", headword]);
    for meaning in meanings {
        cmd.args(["-m", meaning]);
    }
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "add {} failed", headword);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["id"].as_i64().unwrap()
}

/// Parse stdout of a successful JSON command
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
