//! Query tree builder
//!
//! Walks a JSON query document, resolves each clause kind through the
//! provider registry, and composes the resulting nodes into a single tree.
//! Translation is fail-fast: the first structural error aborts the whole
//! document and no partial tree is returned.

use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::error::TrawlError;
use crate::query::ast::QueryNode;
use crate::query::context::TranslationContext;
use crate::query::nodes::BoolQuery;
use crate::query::registry::ClauseRegistry;
use crate::Result;

/// Translates JSON query documents into query-node trees
///
/// Multiple top-level clause keys combine under an implicit conjunction:
/// every clause must match. Traversal follows the document's declared key
/// order, so translating the same document twice yields structurally
/// identical trees.
pub struct QueryTreeBuilder {
    registry: Arc<ClauseRegistry>,
}

impl QueryTreeBuilder {
    /// Create a builder over a provider registry
    pub fn new(registry: Arc<ClauseRegistry>) -> Self {
        Self { registry }
    }

    /// Translate a JSON query document into a query tree
    ///
    /// A `{ "query": { ... } }` wrapper around a single clause document is
    /// unwrapped before dispatch.
    pub fn build(&self, ctx: &TranslationContext, document: &Value) -> Result<Box<dyn QueryNode>> {
        let map = document.as_object().ok_or_else(|| {
            TrawlError::InvalidQuery("query must be a JSON object".to_string())
        })?;

        // Handle wrapped query: { "query": { ... } }
        if map.len() == 1 {
            if let Some(inner) = map.get("query") {
                return self.build(ctx, inner);
            }
        }

        if map.is_empty() {
            return Err(TrawlError::InvalidQuery(
                "query must contain at least one clause".to_string(),
            ));
        }

        let mut nodes = Vec::with_capacity(map.len());
        for (kind, body) in map {
            nodes.push(self.build_clause(ctx, kind, body)?);
        }

        if nodes.len() == 1 {
            return Ok(nodes.remove(0));
        }

        // Implicit conjunction: all top-level clauses must match
        let mut conjunction = BoolQuery::new();
        for node in nodes {
            conjunction = conjunction.must_boxed(node);
        }
        Ok(Box::new(conjunction))
    }

    /// Translate a JSON string into a query tree
    pub fn build_str(&self, ctx: &TranslationContext, json_str: &str) -> Result<Box<dyn QueryNode>> {
        let value: Value = serde_json::from_str(json_str)
            .map_err(|e| TrawlError::InvalidQuery(format!("invalid JSON: {}", e)))?;
        self.build(ctx, &value)
    }

    /// Translate a single clause, resolving its provider through the registry
    ///
    /// Combinator providers call back into this for nested sub-clauses. An
    /// unresolved kind fails the whole document; dropping the clause would
    /// return a query semantically smaller than requested.
    pub fn build_clause(
        &self,
        ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Box<dyn QueryNode>> {
        let provider = self
            .registry
            .resolve(kind)
            .ok_or_else(|| TrawlError::UnsupportedClause(kind.to_string()))?;

        match provider.build(self, ctx, kind, body)? {
            Some(node) => {
                debug!(clause = %kind, node = %node.query_type(), "built query clause");
                Ok(node)
            }
            // Resolved provider declined anyway; treat as an unsupported kind
            None => Err(TrawlError::UnsupportedClause(kind.to_string())),
        }
    }

    /// The provider registry backing this builder
    pub fn registry(&self) -> &ClauseRegistry {
        &self.registry
    }
}

impl Default for QueryTreeBuilder {
    fn default() -> Self {
        Self::new(Arc::new(ClauseRegistry::with_defaults()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn translate(document: Value) -> Result<Box<dyn QueryNode>> {
        QueryTreeBuilder::default().build(&TranslationContext::new(), &document)
    }

    #[test]
    fn test_build_single_clause() {
        let node = translate(json!({ "term": { "status": "published" } })).unwrap();
        assert_eq!(node.query_type(), "term");
    }

    #[test]
    fn test_build_wrapped_query() {
        let node = translate(json!({ "query": { "term": { "status": "published" } } })).unwrap();
        assert_eq!(node.query_type(), "term");
    }

    #[test]
    fn test_build_non_object_document() {
        let err = translate(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, TrawlError::InvalidQuery(_)));
    }

    #[test]
    fn test_build_empty_document() {
        let err = translate(json!({})).unwrap_err();
        assert!(matches!(err, TrawlError::InvalidQuery(_)));
    }

    #[test]
    fn test_build_unsupported_kind() {
        let err = translate(json!({ "unknown_kind": { "title": "x" } })).unwrap_err();
        match err {
            TrawlError::UnsupportedClause(kind) => assert_eq!(kind, "unknown_kind"),
            other => panic!("expected UnsupportedClause, got {other:?}"),
        }
    }

    #[test]
    fn test_implicit_conjunction_of_top_level_clauses() {
        let node = translate(json!({
            "term": { "status": "published" },
            "prefix": { "title": "rust" }
        }))
        .unwrap();

        assert_eq!(node.query_type(), "bool");
        let dsl = node.to_json();
        let must = dsl["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 2);
        // Document order preserved
        assert!(must[0].get("term").is_some());
        assert!(must[1].get("prefix").is_some());
    }

    #[test]
    fn test_failed_clause_aborts_whole_document() {
        let err = translate(json!({
            "term": { "status": "published" },
            "fuzzy": { "title": {} }
        }))
        .unwrap_err();

        assert!(matches!(err, TrawlError::InvalidQuery(_)));
    }

    #[test]
    fn test_build_str_invalid_json() {
        let builder = QueryTreeBuilder::default();
        let err = builder
            .build_str(&TranslationContext::new(), "not valid json")
            .unwrap_err();
        assert!(matches!(err, TrawlError::InvalidQuery(_)));
    }

    #[test]
    fn test_deterministic_translation() {
        let document = json!({
            "bool": {
                "must": [{ "match": { "content": "rust" } }],
                "filter": [{ "range": { "year": { "gte": 2024 } } }]
            }
        });

        let first = translate(document.clone()).unwrap();
        let second = translate(document).unwrap();
        assert_eq!(first.to_json(), second.to_json());
    }
}
