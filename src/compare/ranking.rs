// Ranked lemma lists, the unit handed to presenters.

use std::cmp::Ordering;

use serde::Serialize;

/// Every ranking is cut to this many entries.
pub const TOP_N: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedLemma {
    pub lemma: String,
    pub score: f64,
}

/// Lemmas sorted by score, highest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankedLemma>,
}

impl Ranking {
    /// Sort `scores` descending and keep the first `limit`.
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn from_scores(scores: impl IntoIterator<Item = (String, f64)>, limit: usize) -> Self {
        let mut entries: Vec<RankedLemma> = scores
            .into_iter()
            .map(|(lemma, score)| RankedLemma { lemma, score })
            .collect();
        entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        entries.truncate(limit);
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedLemma] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedLemma> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score of `lemma`, if it made the cut.
    pub fn score_of(&self, lemma: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.lemma == lemma).map(|e| e.score)
    }

    /// 1-based rank of `lemma`, if it made the cut.
    pub fn position(&self, lemma: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.lemma == lemma).map(|i| i + 1)
    }

    pub fn top_score(&self) -> Option<f64> {
        self.entries.first().map(|e| e.score)
    }
}
