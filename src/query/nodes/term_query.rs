//! Term query - exact match on a field

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::query::ast::{field_clause, QueryNode};

/// Query that matches documents containing an exact term in a field
///
/// This is the most basic query type - the term is matched verbatim against
/// the indexed terms of the field, with no analysis applied.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TermQuery {
    /// Field to search in
    pub field: String,
    /// Exact term to match
    pub term: String,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f32,
}

fn default_boost() -> f32 {
    1.0
}

impl TermQuery {
    /// Create a new term query
    pub fn new(field: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            term: term.into(),
            boost: 1.0,
        }
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }
}

impl QueryNode for TermQuery {
    fn query_type(&self) -> &'static str {
        "term"
    }

    fn boost(&self) -> f32 {
        self.boost
    }

    fn to_json(&self) -> Value {
        field_clause(
            "term",
            &self.field,
            json!({ "value": self.term, "boost": self.boost }),
        )
    }

    fn clone_box(&self) -> Box<dyn QueryNode> {
        Box::new(self.clone())
    }
}
