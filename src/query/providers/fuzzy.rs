//! Provider for the `fuzzy` clause kind
//!
//! Format: `{ "fuzzy": { "field": "term" } }`
//! or: `{ "fuzzy": { "field": { "value": "term", "fuzziness": 2,
//! "prefix_length": 0, "max_expansions": 50, "boost": 1.0 } } }`

use serde_json::Value;

use crate::error::TrawlError;
use crate::query::ast::QueryNode;
use crate::query::builder::QueryTreeBuilder;
use crate::query::context::TranslationContext;
use crate::query::nodes::FuzzyQuery;
use crate::query::provider::ClauseProvider;
use crate::query::providers::single_field;
use crate::Result;

/// Builds fuzzy match nodes
///
/// Each modifier defaults independently when absent: fuzziness to the
/// maximum supported edit distance, prefix length to 0, max expansions to
/// 50. Boost is applied only when present. Integer modifiers are taken at
/// native width; out-of-range values pass through to the backend
/// uninterpreted.
pub struct FuzzyClauseProvider;

impl ClauseProvider for FuzzyClauseProvider {
    fn accepts(&self, kind: &str) -> bool {
        kind == "fuzzy"
    }

    fn build(
        &self,
        _builder: &QueryTreeBuilder,
        _ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Option<Box<dyn QueryNode>>> {
        if kind != "fuzzy" {
            return Ok(None);
        }

        let (field, spec) = single_field("fuzzy", body)?;

        let query = match spec {
            Value::String(term) => FuzzyQuery::new(field, term.clone()),
            Value::Object(obj) => {
                let value = obj.get("value").ok_or_else(|| {
                    TrawlError::InvalidQuery("missing value in fuzzy query".to_string())
                })?;
                let term = value.as_str().ok_or_else(|| {
                    TrawlError::InvalidQuery("invalid fuzzy query".to_string())
                })?;

                let mut query = FuzzyQuery::new(field, term);

                if let Some(fuzziness) = obj.get("fuzziness") {
                    if let Some(f) = fuzziness.as_u64() {
                        query = query.with_fuzziness(f as u32);
                    } else if fuzziness.as_str() == Some("AUTO") {
                        query = query.with_fuzziness(FuzzyQuery::MAX_SUPPORTED_DISTANCE);
                    }
                }

                if let Some(prefix_length) = obj.get("prefix_length").and_then(|v| v.as_u64()) {
                    query = query.with_prefix_length(prefix_length as usize);
                }

                if let Some(max_expansions) = obj.get("max_expansions").and_then(|v| v.as_u64()) {
                    query = query.with_max_expansions(max_expansions as usize);
                }

                if let Some(boost) = obj.get("boost").and_then(|v| v.as_f64()) {
                    query = query.with_boost(boost as f32);
                }

                query
            }
            _ => {
                return Err(TrawlError::InvalidQuery("invalid fuzzy query".to_string()));
            }
        };

        Ok(Some(Box::new(query)))
    }
}
