//! Lexicon configuration
//!
//! Configuration lives in an optional `lexis.toml` next to the lexicon file,
//! or at an explicit path. A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LexisError, Result};

pub use types::{BackupConfig, ImportConfig, LexiconConfig, SearchConfig};

/// Default configuration file name
pub const CONFIG_FILE: &str = "lexis.toml";

impl LexiconConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: LexiconConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Config file that sits beside a lexicon file
    pub fn path_for_lexicon(lexicon_path: &Path) -> PathBuf {
        lexicon_path
            .parent()
            .map(|dir| dir.join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LexisError::invalid_argument("config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Backup directory resolved against the lexicon's directory
    pub fn backup_dir_for(&self, lexicon_path: &Path) -> PathBuf {
        let dir = Path::new(&self.backup.dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            lexicon_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(dir)
        }
    }
}
