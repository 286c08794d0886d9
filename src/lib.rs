// Verbatim: cross-corpus lexical comparison of survey verbatims
//
// This is the library root. Each module corresponds to a stage of the
// analysis: annotation, lemma frequencies, comparison, and output.

pub mod compare;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon;
pub mod nlp;
pub mod output;
pub mod pipeline;
