//! Range query - numeric/date range filtering

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::ast::{field_clause, QueryNode};
use crate::query::types::{RangeBounds, RangeValue};

/// Query that matches documents whose field value falls within bounds
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RangeQuery {
    /// Field to filter on
    pub field: String,
    /// Range bounds
    pub bounds: RangeBounds,
}

impl RangeQuery {
    /// Create a new range query with no bounds
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            bounds: RangeBounds::default(),
        }
    }

    /// Set the greater-than-or-equal bound
    pub fn gte(mut self, value: i64) -> Self {
        self.bounds.gte = Some(RangeValue::Long(value));
        self
    }

    /// Set the greater-than bound
    pub fn gt(mut self, value: i64) -> Self {
        self.bounds.gt = Some(RangeValue::Long(value));
        self
    }

    /// Set the less-than-or-equal bound
    pub fn lte(mut self, value: i64) -> Self {
        self.bounds.lte = Some(RangeValue::Long(value));
        self
    }

    /// Set the less-than bound
    pub fn lt(mut self, value: i64) -> Self {
        self.bounds.lt = Some(RangeValue::Long(value));
        self
    }

    /// Set the bounds from a RangeBounds struct
    pub fn with_bounds(mut self, bounds: RangeBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.bounds.boost = boost;
        self
    }
}

impl QueryNode for RangeQuery {
    fn query_type(&self) -> &'static str {
        "range"
    }

    fn boost(&self) -> f32 {
        self.bounds.boost
    }

    fn is_scoring(&self) -> bool {
        // Range queries typically don't contribute to relevance
        false
    }

    fn to_json(&self) -> Value {
        field_clause("range", &self.field, self.bounds.to_json())
    }

    fn clone_box(&self) -> Box<dyn QueryNode> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_query_creation() {
        let query = RangeQuery::new("year").gte(2020).lte(2024);
        assert_eq!(query.field, "year");
        assert_eq!(query.bounds.gte, Some(RangeValue::Long(2020)));
        assert_eq!(query.bounds.lte, Some(RangeValue::Long(2024)));
        assert!(query.bounds.gt.is_none());
    }

    #[test]
    fn test_range_query_with_bounds() {
        let query = RangeQuery::new("date").with_bounds(RangeBounds {
            gte: Some(RangeValue::String("2024-01-01".to_string())),
            lt: Some(RangeValue::String("2025-01-01".to_string())),
            ..Default::default()
        });

        assert!(query.bounds.gte.is_some());
        assert!(query.bounds.lt.is_some());
    }

    #[test]
    fn test_range_query_type() {
        let query = RangeQuery::new("year").gte(2024);
        assert_eq!(query.query_type(), "range");
        assert!(!query.is_scoring());
    }

    #[test]
    fn test_range_query_to_json() {
        let query = RangeQuery::new("year").gte(2020).lt(2025).with_boost(1.5);
        let value = query.to_json();
        assert_eq!(value["range"]["year"]["gte"], 2020);
        assert_eq!(value["range"]["year"]["lt"], 2025);
        assert_eq!(value["range"]["year"]["boost"], 1.5);
        assert!(value["range"]["year"].get("lte").is_none());
    }
}
