// Analysis pipeline: one run from raw columns to rankings.

pub mod analysis;
