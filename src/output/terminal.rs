// Colored terminal output for rankings and corpus summaries.

use colored::Colorize;

use crate::compare::ranking::Ranking;
use crate::lexicon::corpus::CorpusSummary;

use super::{truncate_chars, Presenter};

const BAR_WIDTH: usize = 20;
const LEMMA_WIDTH: usize = 28;

/// Prints each ranking as a table with a bar scaled to the top score.
pub struct TerminalPresenter {
    /// Show at most this many rows per ranking
    pub max_rows: usize,
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self { max_rows: 50 }
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, title: &str, ranking: &Ranking) {
        println!("\n{}", format!("=== {title} ===").bold());
        println!();

        if ranking.is_empty() {
            println!("  {}", "No words to show.".dimmed());
            return;
        }

        let top = ranking.top_score().unwrap_or(0.0);

        for (i, entry) in ranking.iter().take(self.max_rows).enumerate() {
            let filled = bar_length(entry.score, top);
            let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(BAR_WIDTH - filled));

            // Color by position relative to the leader
            let colored_bar = if filled * 4 >= BAR_WIDTH * 3 {
                bar.bright_green()
            } else if filled * 4 >= BAR_WIDTH {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            println!(
                "  {:>3}. {:<width$} {} {:.4}",
                i + 1,
                truncate_chars(&entry.lemma, LEMMA_WIDTH - 3),
                colored_bar,
                entry.score,
                width = LEMMA_WIDTH,
            );
        }
    }
}

/// Number of filled bar cells for `score` relative to `top`.
fn bar_length(score: f64, top: f64) -> usize {
    if top <= 0.0 || score <= 0.0 {
        return 0;
    }
    ((score / top) * BAR_WIDTH as f64).round().min(BAR_WIDTH as f64) as usize
}

/// Display per-corpus figures before the rankings.
pub fn display_corpus_summaries(summaries: &[CorpusSummary]) {
    println!("\n{}", format!("=== Corpora ({}) ===", summaries.len()).bold());
    println!();
    println!(
        "  {:<24} {:>7} {:>8} {:>9} {:>10}",
        "Column".dimmed(),
        "Cells".dimmed(),
        "Missing".dimmed(),
        "Tokens".dimmed(),
        "Lemmas".dimmed(),
    );
    println!("  {}", "-".repeat(62).dimmed());

    for s in summaries {
        let tokens = if s.retained_tokens == 0 {
            "0".red().to_string()
        } else {
            s.retained_tokens.to_string()
        };
        println!(
            "  {:<24} {:>7} {:>8} {:>9} {:>10}",
            truncate_chars(&s.id, 21),
            s.cells,
            s.missing_cells,
            tokens,
            s.vocabulary,
        );
    }

    for s in summaries.iter().filter(|s| s.retained_tokens == 0) {
        println!(
            "  {} {} has no content words; it counts as zero everywhere.",
            "Warning:".yellow(),
            s.id
        );
    }
}
