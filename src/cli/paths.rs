//! Path resolution for the lexicon and its configuration

use std::path::{Path, PathBuf};

use lexis_core::config::LexiconConfig;

/// Lexicon file used when neither `--db` nor `LEXIS_DB` is given
pub const DEFAULT_LEXICON: &str = "lexicon.db";

/// Explicit `--config`, or `lexis.toml` beside the lexicon
pub fn resolve_config_path(explicit: Option<&Path>, lexicon: &Path) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => LexiconConfig::path_for_lexicon(lexicon),
    }
}
