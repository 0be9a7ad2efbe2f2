use serde::{Deserialize, Serialize};

/// Tokenizer configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub stem: bool,
    pub min_token_length: usize,
    pub max_token_length: usize,
    pub language: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_stopwords: true,
            stem: true,
            min_token_length: 2,
            max_token_length: 50,
            language: "english".to_string(),
        }
    }
}

/// A named analyzer definition
///
/// Each definition maps an analyzer name to the tokenizer pipeline that
/// backs it. Names are compared case-insensitively when registered.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzerDefinition {
    pub name: String,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

impl AnalyzerDefinition {
    /// Create a definition with the default tokenizer pipeline
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokenizer: TokenizerConfig::default(),
        }
    }

    /// Set the tokenizer configuration
    pub fn with_tokenizer(mut self, tokenizer: TokenizerConfig) -> Self {
        self.tokenizer = tokenizer;
        self
    }
}

/// Analysis configuration: the set of analyzers registered at startup
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub analyzers: Vec<AnalyzerDefinition>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            analyzers: vec![AnalyzerDefinition::new("standard")],
        }
    }
}
