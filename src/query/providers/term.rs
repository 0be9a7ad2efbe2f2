//! Provider for the `term` clause kind
//!
//! Format: `{ "term": { "field": "value" } }`
//! or: `{ "term": { "field": { "value": "...", "boost": 1.5 } } }`

use serde_json::Value;

use crate::error::TrawlError;
use crate::query::ast::QueryNode;
use crate::query::builder::QueryTreeBuilder;
use crate::query::context::TranslationContext;
use crate::query::nodes::TermQuery;
use crate::query::provider::ClauseProvider;
use crate::query::providers::single_field;
use crate::Result;

/// Builds exact-term nodes
///
/// Scalar shorthand accepts strings, numbers, and booleans; non-string
/// scalars are matched against their canonical text form.
pub struct TermClauseProvider;

fn scalar_term(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl ClauseProvider for TermClauseProvider {
    fn accepts(&self, kind: &str) -> bool {
        kind == "term"
    }

    fn build(
        &self,
        _builder: &QueryTreeBuilder,
        _ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Option<Box<dyn QueryNode>>> {
        if kind != "term" {
            return Ok(None);
        }

        let (field, spec) = single_field("term", body)?;

        let query = match spec {
            Value::Object(obj) => {
                let term = obj
                    .get("value")
                    .and_then(scalar_term)
                    .ok_or_else(|| {
                        TrawlError::InvalidQuery("missing value in term query".to_string())
                    })?;

                let boost = obj.get("boost").and_then(|v| v.as_f64()).unwrap_or(1.0);
                TermQuery::new(field, term).with_boost(boost as f32)
            }
            scalar => {
                let term = scalar_term(scalar).ok_or_else(|| {
                    TrawlError::InvalidQuery("invalid term query".to_string())
                })?;
                TermQuery::new(field, term)
            }
        };

        Ok(Some(Box::new(query)))
    }
}
