// Test doubles for the Annotator boundary.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use verbatim::error::AnnotationError;
use verbatim::nlp::traits::{AnnotatedToken, Annotator, PosTag};

/// Whitespace tokenizer with a fixed lemma/POS lexicon.
///
/// Trailing `.,!?;:` split off into punctuation tokens. Unknown words become
/// `Other` with their lowercased form as lemma.
pub struct LexiconAnnotator {
    lexicon: HashMap<String, (String, PosTag)>,
    pub calls: AtomicUsize,
}

impl LexiconAnnotator {
    pub fn new(entries: &[(&str, &str, PosTag)]) -> Self {
        Self {
            lexicon: entries
                .iter()
                .map(|(form, lemma, pos)| (form.to_string(), (lemma.to_string(), *pos)))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// The lexicon used by the chat/chien scenario.
    pub fn french_pets() -> Self {
        Self::new(&[
            ("le", "le", PosTag::Other),
            ("chat", "chat", PosTag::Noun),
            ("chats", "chat", PosTag::Noun),
            ("mange", "manger", PosTag::Verb),
            ("dort", "dormir", PosTag::Verb),
            ("chien", "chien", PosTag::Noun),
            ("court", "courir", PosTag::Verb),
            ("aboie", "aboyer", PosTag::Verb),
            ("noir", "noir", PosTag::Adj),
            ("vite", "vite", PosTag::Other),
            ("animal", "animal", PosTag::Noun),
        ])
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Annotator for LexiconAnnotator {
    async fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, AnnotationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            let trimmed = word.trim_end_matches(|c: char| ".,!?;:".contains(c));
            if !trimmed.is_empty() {
                let lower = trimmed.to_lowercase();
                let (lemma, pos) = self
                    .lexicon
                    .get(&lower)
                    .cloned()
                    .unwrap_or((lower, PosTag::Other));
                tokens.push(AnnotatedToken::new(lemma, pos, false));
            }
            for punct in word[trimmed.len()..].chars() {
                tokens.push(AnnotatedToken::new(punct.to_string(), PosTag::Other, true));
            }
        }
        Ok(tokens)
    }
}

/// Fails on any text containing `poison`.
pub struct FailingAnnotator {
    pub inner: LexiconAnnotator,
}

#[async_trait]
impl Annotator for FailingAnnotator {
    async fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, AnnotationError> {
        if text.contains("poison") {
            return Err(AnnotationError::Other("unsupported text".to_string()));
        }
        self.inner.annotate(text).await
    }
}
