// Corpora and their lemma frequency distributions.

pub mod corpus;
pub mod frequency;
