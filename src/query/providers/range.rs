//! Provider for the `range` clause kind
//!
//! Format: `{ "range": { "field": { "gte": 2020, "lt": 2025, "boost": 1.0 } } }`
//!
//! Bound values may be integers, floats, or strings (dates, keywords).

use serde_json::Value;

use crate::error::TrawlError;
use crate::query::ast::QueryNode;
use crate::query::builder::QueryTreeBuilder;
use crate::query::context::TranslationContext;
use crate::query::nodes::RangeQuery;
use crate::query::provider::ClauseProvider;
use crate::query::providers::single_field;
use crate::query::types::{RangeBounds, RangeValue};
use crate::Result;

/// Builds range nodes
pub struct RangeClauseProvider;

fn parse_range_value(value: &Value) -> RangeValue {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                RangeValue::Long(i)
            } else if let Some(f) = n.as_f64() {
                RangeValue::Double(f)
            } else {
                RangeValue::String(n.to_string())
            }
        }
        Value::String(s) => RangeValue::String(s.clone()),
        _ => RangeValue::String(value.to_string()),
    }
}

impl ClauseProvider for RangeClauseProvider {
    fn accepts(&self, kind: &str) -> bool {
        kind == "range"
    }

    fn build(
        &self,
        _builder: &QueryTreeBuilder,
        _ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Option<Box<dyn QueryNode>>> {
        if kind != "range" {
            return Ok(None);
        }

        let (field, spec) = single_field("range", body)?;

        let obj = spec.as_object().ok_or_else(|| {
            TrawlError::InvalidQuery("invalid range query".to_string())
        })?;

        let bounds = RangeBounds {
            gte: obj.get("gte").map(parse_range_value),
            gt: obj.get("gt").map(parse_range_value),
            lte: obj.get("lte").map(parse_range_value),
            lt: obj.get("lt").map(parse_range_value),
            boost: obj.get("boost").and_then(|v| v.as_f64()).unwrap_or(1.0) as f32,
        };

        if bounds.is_unbounded() {
            return Err(TrawlError::InvalidQuery(
                "range query must specify at least one bound".to_string(),
            ));
        }

        Ok(Some(Box::new(RangeQuery::new(field).with_bounds(bounds))))
    }
}
