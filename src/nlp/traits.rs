// Annotator trait, the swap-ready NLP boundary.
//
// Tokenization, lemmatization and POS tagging are not done here. An Annotator
// turns raw text into annotated tokens; the rest of the crate only ever sees
// lemmas, coarse tags and a punctuation flag.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AnnotationError;

/// Coarse part-of-speech tag. Only nouns, adjectives and verbs count as
/// content words; everything else collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    Adj,
    Verb,
    Other,
}

impl PosTag {
    /// Map a Universal Dependencies UPOS tag to a coarse tag.
    ///
    /// Proper nouns (`PROPN`) and auxiliaries (`AUX`) map to `Other`.
    pub fn from_upos(upos: &str) -> Self {
        match upos {
            "NOUN" => PosTag::Noun,
            "ADJ" => PosTag::Adj,
            "VERB" => PosTag::Verb,
            _ => PosTag::Other,
        }
    }

    /// Whether this tag marks a content word.
    pub fn is_content(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Adj | PosTag::Verb)
    }
}

/// One token as returned by the annotator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub lemma: String,
    pub pos: PosTag,
    pub is_punct: bool,
}

impl AnnotatedToken {
    pub fn new(lemma: impl Into<String>, pos: PosTag, is_punct: bool) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
            is_punct,
        }
    }
}

/// Trait for annotating raw text. Async because the shipped implementation
/// calls an HTTP service.
///
/// Implementations must be deterministic for identical input within a run.
#[async_trait]
pub trait Annotator: Send + Sync {
    /// Annotate a single text cell.
    async fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, AnnotationError>;
}
