//! Text analysis: tokenizer pipeline and the analyzer registry
//!
//! The registry hands out analyzer instances by name so that the indexing
//! path and the query-analysis path tokenize fields consistently.

mod analyzer;
mod registry;
mod tokenizer;

pub use analyzer::{Analyzer, AnalyzerEntry, AnalyzerFactory};
pub use registry::AnalyzerRegistry;
pub use tokenizer::Tokenizer;
