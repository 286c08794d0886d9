// Analysis pipeline: annotate → frequencies → comparison.
//
// One call is one run. Corpora are annotated one after another; dropping the
// returned future cancels the run between annotator calls. The stopword set
// and annotator are borrowed for the duration of the run and never mutated.

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use crate::compare::{self, validate_corpus_ids, ComparisonReport};
use crate::error::AnalysisError;
use crate::lexicon::corpus::{Corpus, CorpusSummary};
use crate::lexicon::frequency::LemmaFrequencyBuilder;
use crate::nlp::stopwords::StopwordSet;
use crate::nlp::traits::Annotator;

/// Rankings plus the per-corpus figures they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub corpora: Vec<CorpusSummary>,
    #[serde(flatten)]
    pub comparison: ComparisonReport,
}

/// Run a full comparison over `corpora`.
///
/// Fails with `InvalidInput` before any annotation when fewer than two
/// corpora are given or an id repeats. An annotator failure aborts the run.
pub async fn run(
    annotator: &dyn Annotator,
    stopwords: &StopwordSet,
    corpora: &[Corpus],
) -> Result<AnalysisReport, AnalysisError> {
    validate_corpus_ids(corpora.iter().map(|c| c.id.as_str()))?;

    let total_cells: usize = corpora.iter().map(|c| c.cells.len()).sum();
    info!(
        corpora = corpora.len(),
        cells = total_cells,
        stopwords = stopwords.len(),
        "Starting analysis"
    );

    let pb = ProgressBar::new(total_cells as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Annotating [{bar:30}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let builder = LemmaFrequencyBuilder::new(annotator, stopwords).with_progress(pb.clone());

    let mut summaries = Vec::with_capacity(corpora.len());
    let mut distributions = Vec::with_capacity(corpora.len());
    for corpus in corpora {
        let profile = match builder.build(corpus).await {
            Ok(profile) => profile,
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };
        summaries.push(profile.summary);
        distributions.push((corpus.id.clone(), profile.distribution));
    }
    pb.finish_and_clear();

    let comparison = compare::compare(&distributions)?;

    Ok(AnalysisReport {
        corpora: summaries,
        comparison,
    })
}
