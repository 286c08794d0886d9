use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use verbatim::config::{Config, StopwordSource};
use verbatim::input::ColumnTable;
use verbatim::lexicon::frequency::is_retained;
use verbatim::nlp::traits::Annotator;
use verbatim::output::{markdown, present_report, terminal};

/// Verbatim: compare the vocabulary of text columns.
///
/// Finds the content words shared across columns, the ones whose usage
/// varies most between them, and the ones singular to each column.
#[derive(Parser)]
#[command(name = "verbatim", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two or more columns of a JSON column table
    Compare {
        /// Column table (JSON: {"columns": [{"name": ..., "cells": [...]}]})
        input: PathBuf,

        /// Comma-separated columns to compare (default: all columns)
        #[arg(long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Stopword file, one lemma per line (overrides VERBATIM_STOPWORDS)
        #[arg(long)]
        stopwords: Option<PathBuf>,

        /// Also write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Also write the full report as Markdown
        #[arg(long)]
        report: Option<PathBuf>,

        /// Rows shown per ranking in the terminal (default: 50)
        #[arg(long, default_value = "50")]
        rows: usize,
    },

    /// List the columns of a JSON column table
    Columns {
        input: PathBuf,
    },

    /// Annotate a text and show which tokens would be counted
    Annotate {
        text: String,

        /// Stopword file, one lemma per line (overrides VERBATIM_STOPWORDS)
        #[arg(long)]
        stopwords: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("verbatim=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            input,
            columns,
            stopwords,
            json,
            report,
            rows,
        } => {
            let config = Config::load()?.with_stopwords_file(stopwords);

            let table = ColumnTable::load(&input)?;
            let corpora = table.select(columns.as_deref())?;

            let stopword_set = config.load_stopwords()?;
            describe_stopwords(&config.stopwords, stopword_set.len());

            let annotator = config.annotator();
            info!(url = %config.udpipe_url, model = %config.udpipe_model, "Using UDPipe annotator");

            println!(
                "Comparing {} columns: {}",
                corpora.len(),
                corpora
                    .iter()
                    .map(|c| c.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );

            let analysis =
                verbatim::pipeline::analysis::run(&annotator, &stopword_set, &corpora).await?;

            terminal::display_corpus_summaries(&analysis.corpora);
            let mut presenter = terminal::TerminalPresenter { max_rows: rows };
            present_report(&mut presenter, &analysis);

            if let Some(path) = json {
                let body = serde_json::to_string_pretty(&analysis)?;
                std::fs::write(&path, body)
                    .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
                println!("\nJSON report written to: {}", path.display());
            }

            if let Some(path) = report {
                markdown::write_report(&analysis, &path)?;
                println!("Markdown report written to: {}", path.display());
            }

            println!("\n{}", "Comparison complete.".bold());
        }

        Commands::Columns { input } => {
            let table = ColumnTable::load(&input)?;
            println!("Columns in {}:", input.display());
            for column in &table.columns {
                let missing = column.cells.iter().filter(|c| c.is_null()).count();
                println!(
                    "  {:<32} {} cells ({} missing)",
                    column.name.bold(),
                    column.cells.len(),
                    missing
                );
            }
        }

        Commands::Annotate { text, stopwords } => {
            let config = Config::load()?.with_stopwords_file(stopwords);
            let stopword_set = config.load_stopwords()?;
            let annotator = config.annotator();

            let tokens = annotator
                .annotate(&text)
                .await
                .context("Annotation service call failed")?;

            println!(
                "  {:<24} {:<6} {:<6} {}",
                "Lemma".dimmed(),
                "POS".dimmed(),
                "Punct".dimmed(),
                "Counted".dimmed()
            );
            for token in &tokens {
                let kept = if is_retained(token, &stopword_set) {
                    "yes".green()
                } else {
                    "no".dimmed()
                };
                println!(
                    "  {:<24} {:<6} {:<6} {}",
                    token.lemma,
                    format!("{:?}", token.pos),
                    token.is_punct,
                    kept
                );
            }
        }
    }

    Ok(())
}

fn describe_stopwords(source: &StopwordSource, count: usize) {
    match source {
        StopwordSource::File(path) => {
            println!("Stopwords: {} ({count} lemmas)", path.display());
        }
        StopwordSource::BuiltinFrench => {
            println!(
                "Stopwords: built-in French list ({count} lemmas) {}",
                "(set VERBATIM_STOPWORDS or --stopwords to use your own)".dimmed()
            );
        }
    }
}
