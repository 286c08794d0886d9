// Stopword set: lemmas excluded from frequency counts.
//
// Loaded fresh for every run and never mutated afterwards, so a single
// instance can be shared freely by reference.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use stop_words::{get, LANGUAGE};
use tracing::info;

use crate::error::AnalysisError;

/// An immutable set of stopword lemmas. Matching is exact (case-sensitive).
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// An empty set: nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a line-delimited list. Each line is trimmed; blank lines are
    /// ignored and duplicates collapse.
    pub fn from_lines(text: &str) -> Self {
        text.lines().collect()
    }

    /// Load a line-delimited stopword file. An empty file is a valid empty set.
    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let text = fs::read_to_string(path).map_err(|source| AnalysisError::Stopwords {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_lines(&text);
        info!(path = %path.display(), count = set.len(), "Loaded stopwords");
        Ok(set)
    }

    /// The French list bundled with the `stop-words` crate.
    pub fn builtin_french() -> Self {
        let words: Vec<String> = get(LANGUAGE::French);
        let set: Self = words.iter().map(String::as_str).collect();
        info!(count = set.len(), "Using built-in French stopwords");
        set
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.words.contains(lemma)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_trims_and_dedupes() {
        let set = StopwordSet::from_lines("le\n  la \nle\n\n\tde\r\n");
        assert_eq!(set.len(), 3);
        assert!(set.contains("le"));
        assert!(set.contains("la"));
        assert!(set.contains("de"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_empty_text_is_empty_set() {
        assert!(StopwordSet::from_lines("").is_empty());
    }

    #[test]
    fn test_matching_is_exact() {
        let set = StopwordSet::from_lines("le");
        assert!(!set.contains("Le"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = StopwordSet::load(Path::new("/nonexistent/verbatim/stopwords.txt"));
        assert!(matches!(result, Err(AnalysisError::Stopwords { .. })));
    }

    #[test]
    fn test_builtin_french_not_empty() {
        let set = StopwordSet::builtin_french();
        assert!(!set.is_empty());
        assert!(set.contains("le"));
    }
}
