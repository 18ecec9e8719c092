//! Headword search: exact substring and fuzzy matching
//!
//! Both modes fold case with Unicode lowercasing in Rust, so non-ASCII
//! headwords compare the same way in each.
//!
//! Exact mode returns headwords in row (id) order without deduplication.
//! Fuzzy mode returns distinct headwords in ascending order, and its `All`
//! scope covers the three scalar fields only.

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use crate::error::{LexisError, Result};
use crate::query::{SearchQuery, SearchScope};
use crate::similarity::is_close_match;
use crate::trace_time;

impl super::Lexicon {
    /// Find headwords matching `query`.
    ///
    /// A blank term is no filter at all and yields [`list_headwords`](Self::list_headwords).
    #[tracing::instrument(skip(self, query), fields(scope = %query.scope, fuzzy = query.fuzzy))]
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<String>> {
        let start = Instant::now();
        let term = query.normalized_term();
        if term.is_empty() {
            return self.list_headwords();
        }

        let results = if query.fuzzy {
            self.search_fuzzy(&term, query.scope)?
        } else {
            self.search_exact(&term, query.scope)?
        };

        trace_time!(start, "search", results = results.len());
        Ok(results)
    }

    fn search_exact(&self, term: &str, scope: SearchScope) -> Result<Vec<String>> {
        let meanings = match scope {
            SearchScope::Meaning | SearchScope::All => self.meanings_by_entry()?,
            _ => HashMap::new(),
        };
        let contains = |field: &str| field.to_lowercase().contains(term);

        let mut matched = Vec::new();
        for (id, headword, pos, variation) in self.scan_entries()? {
            let in_meanings = || {
                meanings
                    .get(&id)
                    .is_some_and(|ms| ms.iter().any(|m| contains(m)))
            };
            let hit = match scope {
                SearchScope::Headword => contains(&headword),
                SearchScope::PartOfSpeech => contains(&pos),
                SearchScope::Variation => contains(&variation),
                SearchScope::Meaning => in_meanings(),
                SearchScope::All => {
                    contains(&headword) || contains(&pos) || contains(&variation) || in_meanings()
                }
            };
            if hit {
                matched.push(headword);
            }
        }

        Ok(matched)
    }

    fn search_fuzzy(&self, term: &str, scope: SearchScope) -> Result<Vec<String>> {
        let meanings = if scope == SearchScope::Meaning {
            self.meanings_by_entry()?
        } else {
            HashMap::new()
        };
        let close = |field: &str| is_close_match(term, &field.to_lowercase());

        let mut matched = BTreeSet::new();
        for (id, headword, pos, variation) in self.scan_entries()? {
            let hit = match scope {
                SearchScope::Headword => close(&headword),
                SearchScope::PartOfSpeech => close(&pos),
                SearchScope::Variation => close(&variation),
                SearchScope::Meaning => meanings
                    .get(&id)
                    .is_some_and(|ms| ms.iter().any(|m| close(m))),
                SearchScope::All => close(&headword) || close(&pos) || close(&variation),
            };
            if hit {
                matched.insert(headword);
            }
        }

        Ok(matched.into_iter().collect())
    }

    /// `(id, headword, part_of_speech, variation)` per entry in id order, NULL as empty
    fn scan_entries(&self) -> Result<Vec<(i64, String, String, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, headword, part_of_speech, variation FROM Entry ORDER BY id")
            .map_err(|e| LexisError::db_operation("prepare entry scan", e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                ))
            })
            .map_err(|e| LexisError::db_operation("scan entries", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| LexisError::db_operation("read entry", e))
    }

    fn meanings_by_entry(&self) -> Result<HashMap<i64, Vec<String>>> {
        let mut by_entry: HashMap<i64, Vec<String>> = HashMap::new();
        for sense in self.list_senses()? {
            by_entry.entry(sense.entry_id).or_default().push(sense.meaning);
        }
        Ok(by_entry)
    }
}
