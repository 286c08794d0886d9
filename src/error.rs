// Error kinds surfaced by the analysis library.
//
// The binary wraps these in anyhow; inside the library they stay typed so a
// caller can tell an invalid selection apart from an annotator failure.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while running a cross-corpus comparison.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Bad corpus selection: fewer than two corpora, an empty selection list,
    /// a duplicate corpus id, or an unknown column name.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The annotator failed on one cell. Fatal for the whole run, since
    /// dropping the cell would skew that corpus's relative frequencies.
    #[error("annotation failed for corpus '{corpus}' (cell {cell})")]
    Annotation {
        corpus: String,
        cell: usize,
        #[source]
        source: AnnotationError,
    },

    /// The stopword file could not be read.
    #[error("failed to read stopwords from {}", path.display())]
    Stopwords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by an [`Annotator`](crate::nlp::traits::Annotator) implementation.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("annotation service request failed")]
    Http(#[from] reqwest::Error),

    #[error("annotation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed annotation output at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("{0}")]
    Other(String),
}
