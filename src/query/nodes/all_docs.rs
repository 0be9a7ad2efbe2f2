//! Match-all query

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::query::ast::{clause, QueryNode};

/// A query that matches all documents
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AllDocsQuery {
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f32,
}

fn default_boost() -> f32 {
    1.0
}

impl Default for AllDocsQuery {
    fn default() -> Self {
        Self { boost: 1.0 }
    }
}

impl AllDocsQuery {
    /// Create a new match-all query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }
}

impl QueryNode for AllDocsQuery {
    fn query_type(&self) -> &'static str {
        "match_all"
    }

    fn boost(&self) -> f32 {
        self.boost
    }

    fn is_scoring(&self) -> bool {
        false
    }

    fn to_json(&self) -> Value {
        clause("match_all", json!({ "boost": self.boost }))
    }

    fn clone_box(&self) -> Box<dyn QueryNode> {
        Box::new(self.clone())
    }
}
