// Zero-filled lemma × corpus frequency table.
//
// Rows follow the union of lemmas in first-seen order: corpora in input order,
// and within a corpus the distribution's own order. A lemma missing from a
// corpus reads as 0.0 in that column. Entries with a non-positive frequency
// never enter the union, so every row has a positive sum.

use std::collections::HashMap;

use tracing::debug;

use crate::error::AnalysisError;
use crate::lexicon::corpus::CorpusId;
use crate::lexicon::frequency::FrequencyDistribution;

use super::validate_corpus_ids;

#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    corpora: Vec<CorpusId>,
    lemmas: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FrequencyTable {
    /// Build the table from one distribution per corpus.
    ///
    /// Requires at least two corpora with distinct ids.
    pub fn build(distributions: &[(CorpusId, FrequencyDistribution)]) -> Result<Self, AnalysisError> {
        validate_corpus_ids(distributions.iter().map(|(id, _)| id.as_str()))?;

        let width = distributions.len();
        let mut lemmas: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (col, (_, dist)) in distributions.iter().enumerate() {
            for (lemma, freq) in dist.iter() {
                if freq.is_nan() || freq <= 0.0 {
                    continue;
                }
                let row = match index.get(lemma) {
                    Some(&r) => r,
                    None => {
                        index.insert(lemma.to_string(), lemmas.len());
                        lemmas.push(lemma.to_string());
                        rows.push(vec![0.0; width]);
                        lemmas.len() - 1
                    }
                };
                rows[row][col] = freq;
            }
        }

        debug!(corpora = width, lemmas = lemmas.len(), "Built frequency table");

        Ok(Self {
            corpora: distributions.iter().map(|(id, _)| id.clone()).collect(),
            lemmas,
            rows,
        })
    }

    pub fn corpora(&self) -> &[CorpusId] {
        &self.corpora
    }

    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    /// Union size.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    /// Column index of a corpus.
    pub fn corpus_index(&self, id: &str) -> Option<usize> {
        self.corpora.iter().position(|c| c == id)
    }

    /// `(lemma, frequencies across corpora)` in union order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.lemmas
            .iter()
            .zip(&self.rows)
            .map(|(lemma, row)| (lemma.as_str(), row.as_slice()))
    }

    /// Zero-filled frequency of `lemma` in corpus column `col`.
    pub fn frequency(&self, lemma: &str, col: usize) -> f64 {
        self.lemmas
            .iter()
            .position(|l| l == lemma)
            .and_then(|r| self.rows[r].get(col).copied())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(pairs: &[(&str, f64)]) -> FrequencyDistribution {
        FrequencyDistribution::from_frequencies(pairs.iter().map(|(l, f)| (*l, *f)))
    }

    #[test]
    fn test_union_order_and_zero_fill() {
        let table = FrequencyTable::build(&[
            ("A".to_string(), dist(&[("chat", 0.5), ("manger", 0.5)])),
            ("B".to_string(), dist(&[("chien", 0.5), ("chat", 0.5)])),
        ])
        .unwrap();
        assert_eq!(table.lemmas(), &["chat", "manger", "chien"]);
        assert_eq!(table.frequency("chien", 0), 0.0);
        assert_eq!(table.frequency("chat", 1), 0.5);
        assert_eq!(table.frequency("absent", 0), 0.0);
    }

    #[test]
    fn test_zero_entries_excluded() {
        let table = FrequencyTable::build(&[
            ("A".to_string(), dist(&[("a", 1.0), ("ghost", 0.0)])),
            ("B".to_string(), dist(&[])),
        ])
        .unwrap();
        assert_eq!(table.lemmas(), &["a"]);
    }

    #[test]
    fn test_single_corpus_rejected() {
        let result = FrequencyTable::build(&[("A".to_string(), dist(&[("a", 1.0)]))]);
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = FrequencyTable::build(&[
            ("A".to_string(), dist(&[("a", 1.0)])),
            ("A".to_string(), dist(&[("b", 1.0)])),
        ]);
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }
}
