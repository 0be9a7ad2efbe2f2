//! Core types for the query system

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Operator for combining terms in a match query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOperator {
    /// All terms must match (AND)
    And,
    /// At least one term must match (OR)
    #[default]
    Or,
}

impl MatchOperator {
    /// DSL string form of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOperator::And => "and",
            MatchOperator::Or => "or",
        }
    }
}

/// Value type for range queries
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeValue {
    /// 64-bit integer
    Long(i64),
    /// 64-bit floating point
    Double(f64),
    /// String (for dates, keywords)
    String(String),
}

impl RangeValue {
    /// Convert to i64 if possible
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RangeValue::Long(v) => Some(*v),
            RangeValue::Double(v) => Some(*v as i64),
            RangeValue::String(s) => s.parse().ok(),
        }
    }

    /// Convert to f64 if possible
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RangeValue::Long(v) => Some(*v as f64),
            RangeValue::Double(v) => Some(*v),
            RangeValue::String(s) => s.parse().ok(),
        }
    }

    /// JSON form of the value
    pub fn to_json(&self) -> Value {
        match self {
            RangeValue::Long(v) => json!(v),
            RangeValue::Double(v) => json!(v),
            RangeValue::String(s) => json!(s),
        }
    }
}

/// Range bounds for range queries
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    /// Greater than or equal to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<RangeValue>,
    /// Greater than
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<RangeValue>,
    /// Less than or equal to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<RangeValue>,
    /// Less than
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<RangeValue>,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f32,
}

fn default_boost() -> f32 {
    1.0
}

impl RangeBounds {
    /// Whether no bound is set on any side
    pub fn is_unbounded(&self) -> bool {
        self.gte.is_none() && self.gt.is_none() && self.lte.is_none() && self.lt.is_none()
    }

    /// JSON form of the bounds, omitting absent sides
    pub fn to_json(&self) -> Value {
        let mut spec = Map::new();
        if let Some(ref gte) = self.gte {
            spec.insert("gte".to_string(), gte.to_json());
        }
        if let Some(ref gt) = self.gt {
            spec.insert("gt".to_string(), gt.to_json());
        }
        if let Some(ref lte) = self.lte {
            spec.insert("lte".to_string(), lte.to_json());
        }
        if let Some(ref lt) = self.lt {
            spec.insert("lt".to_string(), lt.to_json());
        }
        spec.insert("boost".to_string(), json!(self.boost));
        Value::Object(spec)
    }
}

/// Minimum should match configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinimumShouldMatch {
    /// Exact count
    Count(usize),
    /// Percentage (e.g., "75%")
    Percentage(String),
}

impl MinimumShouldMatch {
    /// Calculate the minimum number of clauses that should match
    pub fn calculate(&self, total_clauses: usize) -> usize {
        match self {
            MinimumShouldMatch::Count(n) => *n,
            MinimumShouldMatch::Percentage(s) => {
                let pct: f64 = s.trim_end_matches('%').parse().unwrap_or(100.0) / 100.0;
                ((total_clauses as f64) * pct).ceil() as usize
            }
        }
    }

    /// JSON form of the configuration
    pub fn to_json(&self) -> Value {
        match self {
            MinimumShouldMatch::Count(n) => json!(n),
            MinimumShouldMatch::Percentage(s) => json!(s),
        }
    }
}

impl Default for MinimumShouldMatch {
    fn default() -> Self {
        MinimumShouldMatch::Count(1)
    }
}
