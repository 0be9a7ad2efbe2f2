use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::Analyzer;
use crate::config::TokenizerConfig;

/// Text tokenizer with stemming and stopword removal
///
/// The pipeline is: unicode word segmentation, optional lowercasing, token
/// length bounds, optional stopword removal, optional stemming. The same
/// pipeline must be applied at index time and at query-analysis time for
/// terms to line up.
pub struct Tokenizer {
    config: TokenizerConfig,
    stemmer: Option<Stemmer>,
    stopwords: HashSet<String>,
}

fn stemmer_algorithm(language: &str) -> Algorithm {
    match language {
        "french" => Algorithm::French,
        "german" => Algorithm::German,
        "spanish" => Algorithm::Spanish,
        _ => Algorithm::English,
    }
}

fn stopword_language(language: &str) -> LANGUAGE {
    match language {
        "french" => LANGUAGE::French,
        "german" => LANGUAGE::German,
        "spanish" => LANGUAGE::Spanish,
        _ => LANGUAGE::English,
    }
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Self {
        let stemmer = if config.stem {
            Some(Stemmer::create(stemmer_algorithm(&config.language)))
        } else {
            None
        };

        let stopwords = if config.remove_stopwords {
            get(stopword_language(&config.language))
                .into_iter()
                .map(|s| s.to_lowercase())
                .collect()
        } else {
            HashSet::new()
        };

        Self {
            config: config.clone(),
            stemmer,
            stopwords,
        }
    }

    /// Tokenize text into a vector of terms
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens: Vec<String> = text
            .unicode_words()
            .map(|word| {
                let mut token = word.to_string();

                if self.config.lowercase {
                    token = token.to_lowercase();
                }

                token
            })
            .filter(|token| {
                token.len() >= self.config.min_token_length
                    && token.len() <= self.config.max_token_length
                    && !self.stopwords.contains(token)
            })
            .collect();

        if let Some(stemmer) = &self.stemmer {
            tokens = tokens
                .into_iter()
                .map(|token| stemmer.stem(&token).to_string())
                .collect();
        }

        tokens
    }

    /// Get unique terms from text
    pub fn unique_terms(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }
}

impl Analyzer for Tokenizer {
    fn analyze(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
    }
}
