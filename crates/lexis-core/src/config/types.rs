//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::query::SearchScope;

/// Lexicon configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Backup behavior before destructive operations
    #[serde(default)]
    pub backup: BackupConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Import behavior
    #[serde(default)]
    pub import: ImportConfig,
}

/// Configuration for backup copies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Copy the lexicon file before delete, merge, delete-duplicates and import
    #[serde(default = "default_backup_enabled")]
    pub enabled: bool,

    /// Backup directory; relative paths resolve against the lexicon's directory
    #[serde(default = "default_backup_dir")]
    pub dir: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            enabled: default_backup_enabled(),
            dir: default_backup_dir(),
        }
    }
}

/// Default search parameters when the caller gives none
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub default_scope: SearchScope,

    #[serde(default)]
    pub fuzzy: bool,
}

/// Configuration for imports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Ask before importing, since imports never deduplicate
    #[serde(default = "default_import_confirm")]
    pub confirm: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            confirm: default_import_confirm(),
        }
    }
}

fn default_backup_enabled() -> bool {
    true
}

fn default_backup_dir() -> String {
    "backups".to_string()
}

fn default_import_confirm() -> bool {
    true
}
