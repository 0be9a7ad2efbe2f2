//! Provider for the `wildcard` clause kind
//!
//! Format: `{ "wildcard": { "field": "pattern*" } }`
//! or: `{ "wildcard": { "field": { "value": "pattern*", "boost": 1.5 } } }`

use serde_json::Value;

use crate::error::TrawlError;
use crate::query::ast::QueryNode;
use crate::query::builder::QueryTreeBuilder;
use crate::query::context::TranslationContext;
use crate::query::nodes::WildcardQuery;
use crate::query::provider::ClauseProvider;
use crate::query::providers::single_field;
use crate::Result;

/// Builds wildcard nodes
///
/// The pattern is compiled during translation so that an uncompilable
/// pattern fails here rather than at execution time.
pub struct WildcardClauseProvider;

impl ClauseProvider for WildcardClauseProvider {
    fn accepts(&self, kind: &str) -> bool {
        kind == "wildcard"
    }

    fn build(
        &self,
        _builder: &QueryTreeBuilder,
        _ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Option<Box<dyn QueryNode>>> {
        if kind != "wildcard" {
            return Ok(None);
        }

        let (field, spec) = single_field("wildcard", body)?;

        let query = match spec {
            Value::String(pattern) => WildcardQuery::new(field, pattern.clone()),
            Value::Object(obj) => {
                let pattern = obj.get("value").and_then(|v| v.as_str()).ok_or_else(|| {
                    TrawlError::InvalidQuery("missing value in wildcard query".to_string())
                })?;

                let mut query = WildcardQuery::new(field, pattern);

                if let Some(boost) = obj.get("boost").and_then(|v| v.as_f64()) {
                    query = query.with_boost(boost as f32);
                }

                query
            }
            _ => {
                return Err(TrawlError::InvalidQuery(
                    "invalid wildcard query".to_string(),
                ));
            }
        };

        query.validate()?;

        Ok(Some(Box::new(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(body: Value) -> Result<Option<Box<dyn QueryNode>>> {
        WildcardClauseProvider.build(
            &QueryTreeBuilder::default(),
            &TranslationContext::new(),
            "wildcard",
            &body,
        )
    }

    #[test]
    fn test_shorthand() {
        let node = build(json!({ "title": "prog*" })).unwrap().unwrap();
        assert_eq!(node.query_type(), "wildcard");
        assert_eq!(node.to_json()["wildcard"]["title"]["value"], "prog*");
    }

    #[test]
    fn test_verbose_with_boost() {
        let node = build(json!({ "title": { "value": "prog*", "boost": 2.0 } }))
            .unwrap()
            .unwrap();
        assert_eq!(node.boost(), 2.0);
    }

    #[test]
    fn test_missing_value() {
        let err = build(json!({ "title": { "boost": 2.0 } })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid query: missing value in wildcard query"
        );
    }
}
