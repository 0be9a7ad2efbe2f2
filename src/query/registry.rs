//! Clause provider registry
//!
//! Providers are tried in registration order and the first whose `accepts`
//! predicate claims the kind wins. The registry is append-only at
//! configuration time and read-only during query processing.

use std::sync::Arc;
use tracing::debug;

use crate::query::provider::ClauseProvider;
use crate::query::providers::{
    AllDocsClauseProvider, BoolClauseProvider, FuzzyClauseProvider, MatchClauseProvider,
    PhraseClauseProvider, PrefixClauseProvider, RangeClauseProvider, TermClauseProvider,
    TermsClauseProvider, WildcardClauseProvider,
};

/// Ordered collection of clause providers
pub struct ClauseRegistry {
    providers: Vec<Arc<dyn ClauseProvider>>,
}

impl ClauseRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry with the standard clause providers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(BoolClauseProvider));
        registry.register(Arc::new(MatchClauseProvider));
        registry.register(Arc::new(AllDocsClauseProvider));
        registry.register(Arc::new(PhraseClauseProvider));
        registry.register(Arc::new(TermClauseProvider));
        registry.register(Arc::new(TermsClauseProvider));
        registry.register(Arc::new(RangeClauseProvider));
        registry.register(Arc::new(PrefixClauseProvider));
        registry.register(Arc::new(WildcardClauseProvider));
        registry.register(Arc::new(FuzzyClauseProvider));
        registry
    }

    /// Append a provider to the chain
    ///
    /// Resolution is first-match: registering a second provider for a kind
    /// that an earlier provider already claims silently shadows the later
    /// one. This is an invariant, not an accident: a provider may claim a
    /// family of kinds, so duplicate detection at registration time would
    /// reject legitimate overlaps.
    pub fn register(&mut self, provider: Arc<dyn ClauseProvider>) {
        self.providers.push(provider);
    }

    /// Resolve a clause kind to the first provider that accepts it
    ///
    /// `None` is not an error; it means this registry does not know how to
    /// build a query for `kind`, and the caller decides whether that is
    /// fatal.
    pub fn resolve(&self, kind: &str) -> Option<&dyn ClauseProvider> {
        let provider = self
            .providers
            .iter()
            .find(|provider| provider.accepts(kind))
            .map(|provider| provider.as_ref());

        if provider.is_none() {
            debug!(clause = %kind, "no provider accepts clause kind");
        }

        provider
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the registry has no providers
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ClauseRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
