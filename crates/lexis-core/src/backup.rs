//! Timestamped copies of a lexicon file
//!
//! Backups are taken before destructive operations. They are best effort:
//! a failed copy is logged and the operation goes ahead.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Timestamp format used in backup file names
pub const BACKUP_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

/// Backup file name for `db_path`: `<file_name>_<YYYYmmdd_HHMMSS>.bak`
pub fn backup_file_name(db_path: &Path, timestamp: &str) -> String {
    let file_name = db_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "lexicon".to_string());
    format!("{}_{}.bak", file_name, timestamp)
}

/// Copy `db_path` into `backup_dir`, creating the directory if needed.
///
/// Returns the backup path, or `None` when the copy could not be made.
pub fn backup_lexicon(db_path: &Path, backup_dir: &Path) -> Option<PathBuf> {
    let timestamp = Local::now().format(BACKUP_TIMESTAMP).to_string();
    let target = backup_dir.join(backup_file_name(db_path, &timestamp));

    if let Err(e) = fs::create_dir_all(backup_dir) {
        tracing::error!(dir = %backup_dir.display(), error = %e, "cannot create backup directory");
        return None;
    }

    match fs::copy(db_path, &target) {
        Ok(bytes) => {
            tracing::info!(backup = %target.display(), bytes, "lexicon backed up");
            Some(target)
        }
        Err(e) => {
            tracing::error!(source = %db_path.display(), error = %e, "backup failed");
            None
        }
    }
}
