// A corpus is one selected column: its name and its raw cells.

use serde::Serialize;

/// Column name identifying a corpus. Unique among the corpora of one run.
pub type CorpusId = String;

/// The cells of one column. `None` marks a missing cell, which is skipped
/// rather than treated as an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    pub id: CorpusId,
    pub cells: Vec<Option<String>>,
}

impl Corpus {
    pub fn new(id: impl Into<CorpusId>, cells: Vec<Option<String>>) -> Self {
        Self {
            id: id.into(),
            cells,
        }
    }

    /// Build a corpus with no missing cells.
    pub fn from_texts<S: Into<String>>(id: impl Into<CorpusId>, texts: impl IntoIterator<Item = S>) -> Self {
        Self::new(id, texts.into_iter().map(|t| Some(t.into())).collect())
    }

    pub fn missing_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }
}

/// Per-corpus figures reported next to the rankings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusSummary {
    pub id: CorpusId,
    pub cells: usize,
    pub missing_cells: usize,
    /// Retained content-word occurrences after filtering
    pub retained_tokens: u64,
    /// Distinct retained lemmas
    pub vocabulary: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cells() {
        let corpus = Corpus::new("A", vec![Some("x".into()), None, Some(String::new()), None]);
        assert_eq!(corpus.missing_cells(), 2);
    }
}
