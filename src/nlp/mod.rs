// Annotation boundary and lexical filtering.
//
// The Annotator trait hides the NLP engine. UdpipeAnnotator is the shipped
// implementation; anything else that produces lemmas and coarse POS tags can
// be swapped in without touching the frequency builder or the comparator.

pub mod conllu;
pub mod stopwords;
pub mod traits;
pub mod udpipe;
