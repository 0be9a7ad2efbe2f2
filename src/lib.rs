pub mod analysis;
pub mod config;
pub mod error;
pub mod query;

pub use analysis::{Analyzer, AnalyzerEntry, AnalyzerFactory, AnalyzerRegistry, Tokenizer};
pub use config::{AnalysisConfig, AnalyzerDefinition, TokenizerConfig};
pub use error::{Result, TrawlError};
pub use query::{ClauseProvider, ClauseRegistry, QueryNode, QueryTreeBuilder, TranslationContext};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
