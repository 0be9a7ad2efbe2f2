//! Clause provider contract
//!
//! One provider exists per clause kind (or family of kinds). Providers are
//! pure: `build` is a transformation from a JSON clause body to a query
//! node, with no side effects and no I/O.

use serde_json::Value;

use crate::query::ast::QueryNode;
use crate::query::builder::QueryTreeBuilder;
use crate::query::context::TranslationContext;
use crate::Result;

/// Builds query nodes for the clause kind(s) it claims
pub trait ClauseProvider: Send + Sync {
    /// Whether this provider claims the given clause kind
    fn accepts(&self, kind: &str) -> bool;

    /// Build a query node from a clause body, or decline
    ///
    /// Returns `Ok(None)` when `kind` is not one this provider owns; that
    /// is how the dispatch chain composes. Every provider is offered every
    /// clause and only one claims it. A structurally invalid body for an
    /// accepted kind is an error, never a decline.
    ///
    /// Combinator providers use `builder` to translate nested sub-clauses
    /// with the same resolution algorithm as top-level clauses.
    fn build(
        &self,
        builder: &QueryTreeBuilder,
        ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Option<Box<dyn QueryNode>>>;
}
