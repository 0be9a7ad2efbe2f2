//! Name-keyed analyzer registry
//!
//! Analyzer names are compared case-insensitively and the last registration
//! for a name wins. The table is populated once at startup from
//! [`AnalysisConfig`] and is read-only during query processing; if an
//! embedding service re-registers at runtime, readers observe either the
//! pre- or post-reload table atomically.

use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::analysis::{Analyzer, AnalyzerEntry, AnalyzerFactory, Tokenizer};
use crate::config::AnalysisConfig;

/// Registry of named analyzer factories
///
/// Lookups that miss return `None`; an unregistered name is a normal
/// outcome, not an error, and the caller decides whether to fall back to a
/// default analyzer or reject the request.
pub struct AnalyzerRegistry {
    entries: ArcSwap<HashMap<String, AnalyzerEntry>>,
}

impl AnalyzerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    /// Build a registry from configuration, one entry per defined analyzer
    ///
    /// Each definition's tokenizer config becomes a factory producing a fresh
    /// [`Tokenizer`] per `create` call.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        let registry = Self::new();

        for definition in &config.analyzers {
            let tokenizer_config = definition.tokenizer.clone();
            registry.register(
                &definition.name,
                Arc::new(move || Box::new(Tokenizer::new(&tokenizer_config)) as Box<dyn Analyzer>),
            );
        }

        registry
    }

    /// Register an analyzer factory under a name
    ///
    /// Names are keyed case-insensitively; registering a name that only
    /// differs in letter case overwrites the previous entry. Last write wins,
    /// no error on overwrite.
    pub fn register(&self, name: &str, factory: AnalyzerFactory) {
        let key = name.to_lowercase();
        let entry = AnalyzerEntry::new(name, factory);

        debug!(analyzer = %name, "registering analyzer");

        self.entries.rcu(|entries| {
            let mut next = HashMap::clone(entries);
            next.insert(key.clone(), entry.clone());
            next
        });
    }

    /// All registered entries; iteration order is unspecified
    pub fn list(&self) -> Vec<AnalyzerEntry> {
        self.entries.load().values().cloned().collect()
    }

    /// Build an analyzer instance by name, case-insensitively
    ///
    /// Returns a fresh instance per call, or `None` when no analyzer is
    /// registered under the name.
    pub fn create(&self, name: &str) -> Option<Box<dyn Analyzer>> {
        self.entries
            .load()
            .get(&name.to_lowercase())
            .map(|entry| entry.create())
    }

    /// Number of registered analyzers
    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}
