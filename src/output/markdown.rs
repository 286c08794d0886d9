// Markdown report generation.
//
// Produces a self-contained report: a corpus summary table followed by one
// table per ranking. Written to disk with `write_report`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::compare::ranking::Ranking;
use crate::pipeline::analysis::AnalysisReport;

use super::{present_report, Presenter};

/// Accumulates ranking sections as Markdown.
#[derive(Default)]
pub struct MarkdownPresenter {
    buffer: String,
}

impl MarkdownPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Presenter for MarkdownPresenter {
    fn present(&mut self, title: &str, ranking: &Ranking) {
        let _ = writeln!(self.buffer, "## {title}\n");
        if ranking.is_empty() {
            self.buffer.push_str("_No words to show._\n\n");
            return;
        }
        self.buffer.push_str("| Rank | Lemma | Score |\n|---:|---|---:|\n");
        for (i, entry) in ranking.iter().enumerate() {
            let _ = writeln!(
                self.buffer,
                "| {} | {} | {:.4} |",
                i + 1,
                escape_cell(&entry.lemma),
                entry.score
            );
        }
        self.buffer.push('\n');
    }
}

/// Render a full analysis report as Markdown.
pub fn generate_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Verbatim comparison\n");
    let _ = writeln!(
        out,
        "Generated {}\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    );

    out.push_str("| Column | Cells | Missing | Tokens | Lemmas |\n|---|---:|---:|---:|---:|\n");
    for s in &report.corpora {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            escape_cell(&s.id),
            s.cells,
            s.missing_cells,
            s.retained_tokens,
            s.vocabulary
        );
    }
    out.push('\n');

    let mut presenter = MarkdownPresenter::new();
    present_report(&mut presenter, report);
    out.push_str(&presenter.finish());
    out
}

/// Write the Markdown report to `path`.
pub fn write_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    fs::write(path, generate_report(report))
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ranking::TOP_N;

    #[test]
    fn test_ranking_table() {
        let ranking = Ranking::from_scores(
            vec![("chat".to_string(), 0.25), ("chien".to_string(), 0.125)],
            TOP_N,
        );
        let mut presenter = MarkdownPresenter::new();
        presenter.present("Common", &ranking);
        let md = presenter.finish();
        assert!(md.starts_with("## Common\n"));
        assert!(md.contains("| 1 | chat | 0.2500 |"));
        assert!(md.contains("| 2 | chien | 0.1250 |"));
    }

    #[test]
    fn test_empty_ranking() {
        let mut presenter = MarkdownPresenter::new();
        presenter.present("Empty", &Ranking::default());
        assert!(presenter.finish().contains("_No words to show._"));
    }

    #[test]
    fn test_pipe_escaped() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }
}
