// Cross-corpus comparison: commonality, divergence and singularity.
//
// All three rankings read the same immutable zero-filled FrequencyTable:
//
//   commonality(lemma)    = mean of its frequencies across corpora
//   divergence(lemma)     = sample standard deviation of those frequencies
//   singularity(lemma, c) = freq_c / sum of its frequencies
//
// Each is sorted descending and cut to TOP_N; ties keep union order.

pub mod metrics;
pub mod ranking;
pub mod table;

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use crate::error::AnalysisError;
use crate::lexicon::corpus::CorpusId;
use crate::lexicon::frequency::FrequencyDistribution;

use self::ranking::{Ranking, TOP_N};
use self::table::FrequencyTable;

/// Singularity ranking of one corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusRanking {
    pub corpus: CorpusId,
    pub ranking: Ranking,
}

/// The three kinds of rankings produced by one comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub commonality: Ranking,
    pub divergence: Ranking,
    /// One entry per corpus, in input order
    pub singularity: Vec<CorpusRanking>,
}

impl ComparisonReport {
    pub fn singularity_for(&self, corpus: &str) -> Option<&Ranking> {
        self.singularity
            .iter()
            .find(|s| s.corpus == corpus)
            .map(|s| &s.ranking)
    }
}

/// Check that a comparison has at least two corpora and no duplicate ids.
pub fn validate_corpus_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<(), AnalysisError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AnalysisError::InvalidInput(format!(
                "corpus '{id}' is selected more than once"
            )));
        }
    }
    if seen.len() < 2 {
        return Err(AnalysisError::InvalidInput(format!(
            "at least 2 corpora are required for a comparison, got {}",
            seen.len()
        )));
    }
    Ok(())
}

fn rank_rows(table: &FrequencyTable, score: impl Fn(&[f64]) -> f64) -> Ranking {
    Ranking::from_scores(
        table.rows().map(|(lemma, row)| (lemma.to_string(), score(row))),
        TOP_N,
    )
}

/// Lemmas with the highest mean frequency across corpora.
pub fn commonality(table: &FrequencyTable) -> Ranking {
    rank_rows(table, metrics::mean)
}

/// Lemmas whose frequency varies most between corpora.
pub fn divergence(table: &FrequencyTable) -> Ranking {
    rank_rows(table, metrics::sample_std_dev)
}

/// Lemmas whose cross-corpus frequency is concentrated in corpus column `col`.
pub fn singularity(table: &FrequencyTable, col: usize) -> Ranking {
    rank_rows(table, |row| metrics::share(row, col))
}

/// Run the full comparison over one distribution per corpus.
pub fn compare(
    distributions: &[(CorpusId, FrequencyDistribution)],
) -> Result<ComparisonReport, AnalysisError> {
    let table = FrequencyTable::build(distributions)?;

    let per_corpus = table
        .corpora()
        .iter()
        .enumerate()
        .map(|(col, id)| CorpusRanking {
            corpus: id.clone(),
            ranking: singularity(&table, col),
        })
        .collect();

    let report = ComparisonReport {
        commonality: commonality(&table),
        divergence: divergence(&table),
        singularity: per_corpus,
    };

    info!(
        corpora = table.corpora().len(),
        union = table.len(),
        top_common = report.commonality.entries().first().map(|e| e.lemma.as_str()).unwrap_or("-"),
        "Compared corpora"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(pairs: &[(&str, f64)]) -> FrequencyDistribution {
        FrequencyDistribution::from_frequencies(pairs.iter().map(|(l, f)| (*l, *f)))
    }

    #[test]
    fn test_validate_requires_two() {
        assert!(validate_corpus_ids(["A", "B"]).is_ok());
        assert!(matches!(
            validate_corpus_ids(["A"]),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_corpus_ids(Vec::<&str>::new()),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_corpus_ids(["A", "B", "A"]),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_shared_word_beats_single_corpus_word_in_commonality() {
        let report = compare(&[
            ("A".to_string(), dist(&[("service", 0.4), ("rare", 0.6)])),
            ("B".to_string(), dist(&[("service", 0.4), ("autre", 0.6)])),
            ("C".to_string(), dist(&[("service", 0.4), ("prix", 0.6)])),
        ])
        .unwrap();
        assert_eq!(report.commonality.entries()[0].lemma, "service");
        // Present everywhere at the same rate: no divergence
        assert!(report.divergence.score_of("service").unwrap() < 1e-12);
        assert_eq!(report.singularity.len(), 3);
        assert_eq!(report.singularity_for("C").unwrap().entries()[0].lemma, "prix");
    }
}
