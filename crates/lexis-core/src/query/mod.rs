//! Search scope and query parameters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LexisError;

/// Which field(s) a search term is tested against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Headword, part of speech, variation, and (exact mode only) meanings
    #[default]
    All,
    Headword,
    PartOfSpeech,
    Variation,
    Meaning,
}

impl SearchScope {
    pub const ALL: [SearchScope; 5] = [
        SearchScope::All,
        SearchScope::Headword,
        SearchScope::PartOfSpeech,
        SearchScope::Variation,
        SearchScope::Meaning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Headword => "headword",
            SearchScope::PartOfSpeech => "part_of_speech",
            SearchScope::Variation => "variation",
            SearchScope::Meaning => "meaning",
        }
    }
}

impl FromStr for SearchScope {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "all" => Ok(SearchScope::All),
            "headword" => Ok(SearchScope::Headword),
            "part_of_speech" | "pos" => Ok(SearchScope::PartOfSpeech),
            "variation" => Ok(SearchScope::Variation),
            "meaning" | "meanings" => Ok(SearchScope::Meaning),
            _ => Err(LexisError::invalid_argument("search scope", s)),
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A headword search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub scope: SearchScope,
    pub fuzzy: bool,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            scope: SearchScope::All,
            fuzzy: false,
        }
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Lowercased, trimmed term; empty means "no filter"
    pub fn normalized_term(&self) -> String {
        self.term.trim().to_lowercase()
    }
}
