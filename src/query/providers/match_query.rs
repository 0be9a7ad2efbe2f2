//! Provider for the `match` clause kind
//!
//! Format: `{ "match": { "field": "text" } }`
//! or: `{ "match": { "field": { "query": "text", "operator": "and",
//! "analyzer": "standard", "minimum_should_match": "75%", "boost": 2.0 } } }`

use serde_json::Value;

use crate::error::TrawlError;
use crate::query::ast::QueryNode;
use crate::query::builder::QueryTreeBuilder;
use crate::query::context::TranslationContext;
use crate::query::nodes::MatchQuery;
use crate::query::provider::ClauseProvider;
use crate::query::providers::single_field;
use crate::query::types::MatchOperator;
use crate::Result;

/// Builds full-text match nodes
///
/// The operator and analyzer fall back to the request context when the
/// clause does not specify them.
pub struct MatchClauseProvider;

impl ClauseProvider for MatchClauseProvider {
    fn accepts(&self, kind: &str) -> bool {
        kind == "match"
    }

    fn build(
        &self,
        _builder: &QueryTreeBuilder,
        ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Option<Box<dyn QueryNode>>> {
        if kind != "match" {
            return Ok(None);
        }

        let (field, spec) = single_field("match", body)?;

        let mut query = match spec {
            Value::String(text) => {
                let mut query = MatchQuery::new(field, text.clone());
                query.operator = ctx.default_operator;
                query
            }
            Value::Object(obj) => {
                let text = obj.get("query").and_then(|v| v.as_str()).ok_or_else(|| {
                    TrawlError::InvalidQuery("missing query in match query".to_string())
                })?;

                let mut query = MatchQuery::new(field, text);

                if let Some(op) = obj.get("operator").and_then(|v| v.as_str()) {
                    query.operator = match op.to_lowercase().as_str() {
                        "and" => MatchOperator::And,
                        "or" => MatchOperator::Or,
                        _ => ctx.default_operator,
                    };
                } else {
                    query.operator = ctx.default_operator;
                }

                if let Some(boost) = obj.get("boost").and_then(|v| v.as_f64()) {
                    query = query.with_boost(boost as f32);
                }

                if let Some(analyzer) = obj.get("analyzer").and_then(|v| v.as_str()) {
                    query = query.with_analyzer(analyzer);
                }

                if let Some(msm) = obj.get("minimum_should_match").and_then(|v| v.as_str()) {
                    query = query.with_minimum_should_match(msm);
                }

                query
            }
            _ => {
                return Err(TrawlError::InvalidQuery("invalid match query".to_string()));
            }
        };

        if query.analyzer.is_none() {
            query.analyzer = ctx.default_analyzer.clone();
        }

        Ok(Some(Box::new(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(body: Value) -> Result<Option<Box<dyn QueryNode>>> {
        MatchClauseProvider.build(
            &QueryTreeBuilder::default(),
            &TranslationContext::new(),
            "match",
            &body,
        )
    }

    #[test]
    fn test_shorthand() {
        let node = build(json!({ "content": "rust programming" })).unwrap().unwrap();
        assert_eq!(node.query_type(), "match");
        assert_eq!(node.to_json()["match"]["content"]["query"], "rust programming");
        assert_eq!(node.to_json()["match"]["content"]["operator"], "or");
    }

    #[test]
    fn test_verbose_options() {
        let node = build(json!({
            "content": {
                "query": "rust programming",
                "operator": "and",
                "boost": 2.0,
                "minimum_should_match": "75%"
            }
        }))
        .unwrap()
        .unwrap();

        let value = node.to_json();
        assert_eq!(value["match"]["content"]["operator"], "and");
        assert_eq!(value["match"]["content"]["boost"], 2.0);
        assert_eq!(value["match"]["content"]["minimum_should_match"], "75%");
    }

    #[test]
    fn test_missing_query_key() {
        let err = build(json!({ "content": { "operator": "and" } })).unwrap_err();
        assert_eq!(err.to_string(), "Invalid query: missing query in match query");
    }

    #[test]
    fn test_context_defaults_apply() {
        let ctx = TranslationContext::new()
            .with_default_operator(MatchOperator::And)
            .with_default_analyzer("standard");

        let node = MatchClauseProvider
            .build(
                &QueryTreeBuilder::default(),
                &ctx,
                "match",
                &json!({ "content": "rust" }),
            )
            .unwrap()
            .unwrap();

        let value = node.to_json();
        assert_eq!(value["match"]["content"]["operator"], "and");
        assert_eq!(value["match"]["content"]["analyzer"], "standard");
    }

    #[test]
    fn test_clause_analyzer_wins_over_context() {
        let ctx = TranslationContext::new().with_default_analyzer("standard");

        let node = MatchClauseProvider
            .build(
                &QueryTreeBuilder::default(),
                &ctx,
                "match",
                &json!({ "content": { "query": "rust", "analyzer": "exact" } }),
            )
            .unwrap()
            .unwrap();

        assert_eq!(node.to_json()["match"]["content"]["analyzer"], "exact");
    }

    #[test]
    fn test_invalid_spec_shape() {
        let err = build(json!({ "content": 42 })).unwrap_err();
        assert_eq!(err.to_string(), "Invalid query: invalid match query");
    }
}
