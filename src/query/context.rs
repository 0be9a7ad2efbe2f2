//! Per-request translation context
//!
//! The context carries request-scoped settings through to clause providers.
//! The tree builder itself never interprets it; providers read what they
//! need and ignore the rest.

use crate::query::types::MatchOperator;

/// Request-scoped settings passed through translation
#[derive(Clone, Debug, Default)]
pub struct TranslationContext {
    /// Operator used by match clauses that do not specify one
    pub default_operator: MatchOperator,
    /// Analyzer applied to match clauses that do not specify one
    pub default_analyzer: Option<String>,
}

impl TranslationContext {
    /// Create a context with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default match operator
    pub fn with_default_operator(mut self, operator: MatchOperator) -> Self {
        self.default_operator = operator;
        self
    }

    /// Set the default analyzer name
    pub fn with_default_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.default_analyzer = Some(analyzer.into());
        self
    }
}
