//! Provider for the `match_phrase` clause kind
//!
//! Format: `{ "match_phrase": { "field": "exact phrase" } }`
//! or: `{ "match_phrase": { "field": { "query": "exact phrase", "slop": 2,
//! "boost": 1.0 } } }`

use serde_json::Value;

use crate::error::TrawlError;
use crate::query::ast::QueryNode;
use crate::query::builder::QueryTreeBuilder;
use crate::query::context::TranslationContext;
use crate::query::nodes::PhraseQuery;
use crate::query::provider::ClauseProvider;
use crate::query::providers::single_field;
use crate::Result;

/// Builds phrase nodes
pub struct PhraseClauseProvider;

impl ClauseProvider for PhraseClauseProvider {
    fn accepts(&self, kind: &str) -> bool {
        kind == "match_phrase"
    }

    fn build(
        &self,
        _builder: &QueryTreeBuilder,
        _ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Option<Box<dyn QueryNode>>> {
        if kind != "match_phrase" {
            return Ok(None);
        }

        let (field, spec) = single_field("match_phrase", body)?;

        let query = match spec {
            Value::String(phrase) => PhraseQuery::new(field, phrase.clone()),
            Value::Object(obj) => {
                let phrase = obj.get("query").and_then(|v| v.as_str()).ok_or_else(|| {
                    TrawlError::InvalidQuery("missing query in match_phrase query".to_string())
                })?;

                let mut query = PhraseQuery::new(field, phrase);

                if let Some(slop) = obj.get("slop").and_then(|v| v.as_u64()) {
                    query = query.with_slop(slop as u32);
                }

                if let Some(boost) = obj.get("boost").and_then(|v| v.as_f64()) {
                    query = query.with_boost(boost as f32);
                }

                query
            }
            _ => {
                return Err(TrawlError::InvalidQuery(
                    "invalid match_phrase query".to_string(),
                ));
            }
        };

        Ok(Some(Box::new(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(body: Value) -> Result<Option<Box<dyn QueryNode>>> {
        PhraseClauseProvider.build(
            &QueryTreeBuilder::default(),
            &TranslationContext::new(),
            "match_phrase",
            &body,
        )
    }

    #[test]
    fn test_shorthand() {
        let node = build(json!({ "content": "rust programming" })).unwrap().unwrap();
        assert_eq!(node.query_type(), "phrase");
        let value = node.to_json();
        assert_eq!(value["match_phrase"]["content"]["query"], "rust programming");
        assert_eq!(value["match_phrase"]["content"]["slop"], 0);
    }

    #[test]
    fn test_verbose_with_slop_and_boost() {
        let node = build(json!({
            "content": { "query": "rust programming", "slop": 2, "boost": 2.5 }
        }))
        .unwrap()
        .unwrap();

        let value = node.to_json();
        assert_eq!(value["match_phrase"]["content"]["slop"], 2);
        assert_eq!(value["match_phrase"]["content"]["boost"], 2.5);
    }

    #[test]
    fn test_missing_query_key() {
        let err = build(json!({ "content": { "slop": 2 } })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid query: missing query in match_phrase query"
        );
    }
}
