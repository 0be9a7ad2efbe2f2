//! Provider for the `terms` clause kind
//!
//! Format: `{ "terms": { "field": ["value1", "value2"], "boost": 1.5 } }`

use serde_json::Value;

use crate::error::TrawlError;
use crate::query::ast::QueryNode;
use crate::query::builder::QueryTreeBuilder;
use crate::query::context::TranslationContext;
use crate::query::nodes::TermsQuery;
use crate::query::provider::ClauseProvider;
use crate::Result;

/// Builds any-of term-set nodes
///
/// `boost` lives beside the field key rather than inside it, so the field
/// is the first key that is not `boost`.
pub struct TermsClauseProvider;

impl ClauseProvider for TermsClauseProvider {
    fn accepts(&self, kind: &str) -> bool {
        kind == "terms"
    }

    fn build(
        &self,
        _builder: &QueryTreeBuilder,
        _ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Option<Box<dyn QueryNode>>> {
        if kind != "terms" {
            return Ok(None);
        }

        let map = body.as_object().ok_or_else(|| {
            TrawlError::InvalidQuery("invalid terms query".to_string())
        })?;

        let (field, spec) = map.iter().find(|(k, _)| *k != "boost").ok_or_else(|| {
            TrawlError::InvalidQuery("terms query must specify a field".to_string())
        })?;

        if map.iter().filter(|(k, _)| *k != "boost").count() > 1 {
            return Err(TrawlError::InvalidQuery("invalid terms query".to_string()));
        }

        let values = spec.as_array().ok_or_else(|| {
            TrawlError::InvalidQuery("invalid terms query".to_string())
        })?;

        let terms: Vec<String> = values
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => v.to_string(),
            })
            .collect();

        let boost = map.get("boost").and_then(|v| v.as_f64()).unwrap_or(1.0);

        Ok(Some(Box::new(
            TermsQuery::new(field.clone(), terms).with_boost(boost as f32),
        )))
    }
}
