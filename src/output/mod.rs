// Output formatting: terminal display and report generation.
//
// Presenters render one ranking at a time and have no way to feed anything
// back into the analysis.

pub mod markdown;
pub mod terminal;

use crate::compare::ranking::Ranking;
use crate::pipeline::analysis::AnalysisReport;

/// Something that can render a ranking under a title.
pub trait Presenter {
    fn present(&mut self, title: &str, ranking: &Ranking);
}

pub fn commonality_title() -> String {
    "Most common words (top 50)".to_string()
}

pub fn divergence_title() -> String {
    "Most divergent words (top 50)".to_string()
}

pub fn singularity_title(corpus: &str) -> String {
    format!("Words singular to {corpus} (top 50)")
}

/// Hand every ranking of a report to `presenter`: commonality, divergence,
/// then one singularity ranking per corpus in input order.
pub fn present_report(presenter: &mut dyn Presenter, report: &AnalysisReport) {
    let comparison = &report.comparison;
    presenter.present(&commonality_title(), &comparison.commonality);
    presenter.present(&divergence_title(), &comparison.divergence);
    for entry in &comparison.singularity {
        presenter.present(&singularity_title(&entry.corpus), &entry.ranking);
    }
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ranking::TOP_N;
    use crate::compare::{ComparisonReport, CorpusRanking};

    struct Recorder(Vec<String>);

    impl Presenter for Recorder {
        fn present(&mut self, title: &str, _ranking: &Ranking) {
            self.0.push(title.to_string());
        }
    }

    #[test]
    fn test_present_report_order() {
        let ranking = Ranking::from_scores(vec![("chat".to_string(), 1.0)], TOP_N);
        let report = AnalysisReport {
            corpora: vec![],
            comparison: ComparisonReport {
                commonality: ranking.clone(),
                divergence: ranking.clone(),
                singularity: vec![
                    CorpusRanking { corpus: "A".into(), ranking: ranking.clone() },
                    CorpusRanking { corpus: "B".into(), ranking },
                ],
            },
        };
        let mut recorder = Recorder(Vec::new());
        present_report(&mut recorder, &report);
        assert_eq!(
            recorder.0,
            vec![
                commonality_title(),
                divergence_title(),
                singularity_title("A"),
                singularity_title("B"),
            ]
        );
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("générosité", 4), "géné...");
        assert_eq!(truncate_chars("chat", 4), "chat");
    }
}
