//! Provider for the `prefix` clause kind
//!
//! Format: `{ "prefix": { "field": "prefix" } }`
//! or: `{ "prefix": { "field": { "value": "prefix", "max_expansions": 100,
//! "boost": 1.5 } } }`

use serde_json::Value;

use crate::error::TrawlError;
use crate::query::ast::QueryNode;
use crate::query::builder::QueryTreeBuilder;
use crate::query::context::TranslationContext;
use crate::query::nodes::PrefixQuery;
use crate::query::provider::ClauseProvider;
use crate::query::providers::single_field;
use crate::Result;

/// Builds prefix nodes
pub struct PrefixClauseProvider;

impl ClauseProvider for PrefixClauseProvider {
    fn accepts(&self, kind: &str) -> bool {
        kind == "prefix"
    }

    fn build(
        &self,
        _builder: &QueryTreeBuilder,
        _ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Option<Box<dyn QueryNode>>> {
        if kind != "prefix" {
            return Ok(None);
        }

        let (field, spec) = single_field("prefix", body)?;

        let query = match spec {
            Value::String(prefix) => PrefixQuery::new(field, prefix.clone()),
            Value::Object(obj) => {
                let prefix = obj.get("value").and_then(|v| v.as_str()).ok_or_else(|| {
                    TrawlError::InvalidQuery("missing value in prefix query".to_string())
                })?;

                let mut query = PrefixQuery::new(field, prefix);

                if let Some(max_expansions) = obj.get("max_expansions").and_then(|v| v.as_u64()) {
                    query = query.with_max_expansions(max_expansions as usize);
                }

                if let Some(boost) = obj.get("boost").and_then(|v| v.as_f64()) {
                    query = query.with_boost(boost as f32);
                }

                query
            }
            _ => {
                return Err(TrawlError::InvalidQuery("invalid prefix query".to_string()));
            }
        };

        Ok(Some(Box::new(query)))
    }
}
