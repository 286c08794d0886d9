// Lemma frequency builder.
//
// Turns one corpus into a relative-frequency distribution over its retained
// content-word lemmas. A token is kept when it is not punctuation, is tagged
// noun/adjective/verb, and its lemma is not a stopword.
//
// Lemma order is first-seen order throughout. The comparator builds its union
// from that order, which is what makes tie-breaking reproducible.

use std::collections::HashMap;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::error::AnalysisError;
use crate::nlp::stopwords::StopwordSet;
use crate::nlp::traits::{AnnotatedToken, Annotator};

use super::corpus::{Corpus, CorpusSummary};

/// Whether a token counts toward the corpus vocabulary.
pub fn is_retained(token: &AnnotatedToken, stopwords: &StopwordSet) -> bool {
    !token.is_punct && token.pos.is_content() && !stopwords.contains(&token.lemma)
}

/// Raw occurrence counts of retained lemmas, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LemmaCounts {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
    total: u64,
}

impl LemmaCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `lemma`.
    pub fn add(&mut self, lemma: &str) {
        match self.index.get(lemma) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(lemma.to_string(), self.entries.len());
                self.entries.push((lemma.to_string(), 1));
            }
        }
        self.total += 1;
    }

    pub fn get(&self, lemma: &str) -> u64 {
        self.index.get(lemma).map_or(0, |&i| self.entries[i].1)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct lemmas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Divide every count by the total. Empty when nothing was retained.
    pub fn to_distribution(&self) -> FrequencyDistribution {
        if self.total == 0 {
            return FrequencyDistribution::default();
        }
        let total = self.total as f64;
        FrequencyDistribution::from_frequencies(
            self.entries
                .iter()
                .map(|(lemma, count)| (lemma.clone(), *count as f64 / total)),
        )
    }
}

/// Relative frequency of each retained lemma in one corpus.
///
/// Values sum to 1.0, unless the distribution is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyDistribution {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl FrequencyDistribution {
    /// Build from precomputed frequencies. A repeated lemma keeps its first
    /// position and its last value.
    pub fn from_frequencies<S: Into<String>>(freqs: impl IntoIterator<Item = (S, f64)>) -> Self {
        let mut dist = Self::default();
        for (lemma, freq) in freqs {
            let lemma = lemma.into();
            match dist.index.get(&lemma) {
                Some(&i) => dist.entries[i].1 = freq,
                None => {
                    dist.index.insert(lemma.clone(), dist.entries.len());
                    dist.entries.push((lemma, freq));
                }
            }
        }
        dist
    }

    pub fn get(&self, lemma: &str) -> Option<f64> {
        self.index.get(lemma).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, f)| (l.as_str(), *f))
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, f)| f).sum()
    }
}

/// Everything the builder learned about one corpus.
#[derive(Debug, Clone)]
pub struct CorpusProfile {
    pub counts: LemmaCounts,
    pub distribution: FrequencyDistribution,
    pub summary: CorpusSummary,
}

/// Annotates a corpus cell by cell and accumulates retained lemmas.
pub struct LemmaFrequencyBuilder<'a> {
    annotator: &'a dyn Annotator,
    stopwords: &'a StopwordSet,
    progress: Option<ProgressBar>,
}

impl<'a> LemmaFrequencyBuilder<'a> {
    pub fn new(annotator: &'a dyn Annotator, stopwords: &'a StopwordSet) -> Self {
        Self {
            annotator,
            stopwords,
            progress: None,
        }
    }

    /// Tick `progress` once per cell, missing cells included.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Build the frequency profile of one corpus.
    ///
    /// Fails on the first annotator error: a dropped cell would silently
    /// skew every relative frequency of the corpus.
    pub async fn build(&self, corpus: &Corpus) -> Result<CorpusProfile, AnalysisError> {
        let mut counts = LemmaCounts::new();

        for (cell, text) in corpus.cells.iter().enumerate() {
            if let Some(text) = text {
                let tokens = self.annotator.annotate(text).await.map_err(|source| {
                    AnalysisError::Annotation {
                        corpus: corpus.id.clone(),
                        cell,
                        source,
                    }
                })?;

                for token in tokens.iter().filter(|t| is_retained(t, self.stopwords)) {
                    counts.add(&token.lemma);
                }
            }
            if let Some(pb) = &self.progress {
                pb.inc(1);
            }
        }

        let distribution = counts.to_distribution();
        let summary = CorpusSummary {
            id: corpus.id.clone(),
            cells: corpus.cells.len(),
            missing_cells: corpus.missing_cells(),
            retained_tokens: counts.total(),
            vocabulary: counts.len(),
        };

        if distribution.is_empty() {
            warn!(corpus = %corpus.id, cells = summary.cells, "No content words retained");
        } else {
            info!(
                corpus = %corpus.id,
                tokens = summary.retained_tokens,
                vocabulary = summary.vocabulary,
                "Built lemma frequencies"
            );
        }
        debug!(corpus = %corpus.id, missing = summary.missing_cells, "Skipped missing cells");

        Ok(CorpusProfile {
            counts,
            distribution,
            summary,
        })
    }
}
