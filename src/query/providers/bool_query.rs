//! Provider for the `bool` clause kind
//!
//! The bool clause is a combinator: its `must`, `should`, `must_not`, and
//! `filter` sections hold sub-clauses that are translated with the same
//! resolution algorithm as top-level clauses, through the builder passed in.

use serde_json::Value;

use crate::error::TrawlError;
use crate::query::ast::QueryNode;
use crate::query::builder::QueryTreeBuilder;
use crate::query::context::TranslationContext;
use crate::query::nodes::BoolQuery;
use crate::query::provider::ClauseProvider;
use crate::query::types::MinimumShouldMatch;
use crate::Result;

/// Builds boolean combinator nodes
pub struct BoolClauseProvider;

/// Translate a clause section: an array of sub-documents, or a single
/// sub-document without the array wrapper
fn build_section(
    builder: &QueryTreeBuilder,
    ctx: &TranslationContext,
    value: &Value,
) -> Result<Vec<Box<dyn QueryNode>>> {
    match value {
        Value::Array(items) => items.iter().map(|item| builder.build(ctx, item)).collect(),
        Value::Object(_) => Ok(vec![builder.build(ctx, value)?]),
        _ => Err(TrawlError::InvalidQuery(
            "bool clause section must be an array or object".to_string(),
        )),
    }
}

fn parse_minimum_should_match(value: &Value) -> Result<MinimumShouldMatch> {
    match value {
        Value::Number(n) => Ok(MinimumShouldMatch::Count(n.as_u64().unwrap_or(1) as usize)),
        Value::String(s) => {
            if s.ends_with('%') {
                Ok(MinimumShouldMatch::Percentage(s.clone()))
            } else {
                let count: usize = s.parse().map_err(|_| {
                    TrawlError::InvalidQuery(format!("invalid minimum_should_match: {}", s))
                })?;
                Ok(MinimumShouldMatch::Count(count))
            }
        }
        _ => Err(TrawlError::InvalidQuery(
            "minimum_should_match must be a number or string".to_string(),
        )),
    }
}

impl ClauseProvider for BoolClauseProvider {
    fn accepts(&self, kind: &str) -> bool {
        kind == "bool"
    }

    fn build(
        &self,
        builder: &QueryTreeBuilder,
        ctx: &TranslationContext,
        kind: &str,
        body: &Value,
    ) -> Result<Option<Box<dyn QueryNode>>> {
        if kind != "bool" {
            return Ok(None);
        }

        let map = body.as_object().ok_or_else(|| {
            TrawlError::InvalidQuery("invalid bool query".to_string())
        })?;

        let mut query = BoolQuery::new();

        if let Some(must) = map.get("must") {
            query.must = build_section(builder, ctx, must)?;
        }

        if let Some(should) = map.get("should") {
            query.should = build_section(builder, ctx, should)?;
        }

        if let Some(must_not) = map.get("must_not") {
            query.must_not = build_section(builder, ctx, must_not)?;
        }

        if let Some(filter) = map.get("filter") {
            query.filter = build_section(builder, ctx, filter)?;
        }

        if let Some(msm) = map.get("minimum_should_match") {
            query.minimum_should_match = parse_minimum_should_match(msm)?;
        }

        if let Some(boost) = map.get("boost").and_then(|v| v.as_f64()) {
            query = query.with_boost(boost as f32);
        }

        Ok(Some(Box::new(query)))
    }
}
