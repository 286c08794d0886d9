// CoNLL-U parsing.
//
// UDPipe (and most UD toolchains) emit CoNLL-U: one token per line, ten
// tab-separated columns, `#` comment lines and blank lines between sentences.
// We only need ID, FORM, LEMMA and UPOS.
//
// Spec: https://universaldependencies.org/format.html

use crate::error::AnnotationError;

use super::traits::{AnnotatedToken, PosTag};

const COLUMN_COUNT: usize = 10;

/// Parse a CoNLL-U document into annotated tokens, in document order.
///
/// Multi-word token ranges (`1-2`, e.g. French "du" → "de le") are skipped in
/// favor of their syntactic words, and empty nodes (`8.1`) are skipped
/// entirely. A lemma of `_` falls back to the lowercased surface form.
pub fn parse(document: &str) -> Result<Vec<AnnotatedToken>, AnnotationError> {
    let mut tokens = Vec::new();

    for (idx, raw) in document.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != COLUMN_COUNT {
            return Err(AnnotationError::Format {
                line: idx + 1,
                reason: format!("expected {COLUMN_COUNT} columns, found {}", fields.len()),
            });
        }

        let id = fields[0];
        if id.contains('-') || id.contains('.') {
            continue;
        }
        if id.parse::<u32>().is_err() {
            return Err(AnnotationError::Format {
                line: idx + 1,
                reason: format!("invalid token id '{id}'"),
            });
        }

        let form = fields[1];
        let lemma = match fields[2] {
            "_" | "" => form.to_lowercase(),
            l => l.to_string(),
        };
        let upos = fields[3];

        tokens.push(AnnotatedToken {
            lemma,
            pos: PosTag::from_upos(upos),
            is_punct: upos == "PUNCT",
        });
    }

    Ok(tokens)
}
