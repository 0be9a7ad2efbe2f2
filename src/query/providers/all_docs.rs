//! Provider for the `match_all` clause kind
//!
//! Format: `{ "match_all": {} }` or `{ "match_all": { "boost": 2.0 } }`

use serde_json::Value;

use crate::error::TrawlError;
use crate::query::ast::QueryNode;
use crate::query::builder::QueryTreeBuilder;
use crate::query::context::TranslationContext;
use crate::query::nodes::AllDocsQuery;
use crate::query::provider::ClauseProvider;
use crate::Result;

/// Builds match-all nodes
pub struct AllDocsClauseProvider;

impl ClauseProvider for AllDocsClauseProvider {
    fn accepts(&self, kind: &str) -> bool {
        kind == "match_all"
    }

    fn build(
        &self,
        _builder: &QueryTreeBuilder,
        _ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Option<Box<dyn QueryNode>>> {
        if kind != "match_all" {
            return Ok(None);
        }

        let map = body.as_object().ok_or_else(|| {
            TrawlError::InvalidQuery("invalid match_all query".to_string())
        })?;

        let boost = map.get("boost").and_then(|v| v.as_f64()).unwrap_or(1.0);

        Ok(Some(Box::new(AllDocsQuery::new().with_boost(boost as f32))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(body: Value) -> Result<Option<Box<dyn QueryNode>>> {
        AllDocsClauseProvider.build(
            &QueryTreeBuilder::default(),
            &TranslationContext::new(),
            "match_all",
            &body,
        )
    }

    #[test]
    fn test_empty_body() {
        let node = build(json!({})).unwrap().unwrap();
        assert_eq!(node.query_type(), "match_all");
        assert_eq!(node.boost(), 1.0);
    }

    #[test]
    fn test_with_boost() {
        let node = build(json!({ "boost": 2.0 })).unwrap().unwrap();
        assert_eq!(node.boost(), 2.0);
    }

    #[test]
    fn test_non_object_body() {
        let err = build(json!("everything")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid query: invalid match_all query");
    }
}
