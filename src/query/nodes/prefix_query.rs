//! Prefix query - matches terms starting with a prefix
//!
//! A prefix query matches all terms that begin with the specified prefix.
//! This is a specialized form of wildcard query for patterns like `prefix*`.
//!
//! # Example
//!
//! ```rust
//! use trawl::query::nodes::PrefixQuery;
//!
//! // Match terms starting with "prog" (programming, progress, etc.)
//! let query = PrefixQuery::new("content", "prog");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::query::ast::{field_clause, QueryNode};

/// Query that matches terms starting with a prefix
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrefixQuery {
    /// Field to search in
    pub field: String,
    /// Prefix to match
    pub prefix: String,
    /// Maximum number of terms to expand (default: 50)
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f32,
}

fn default_max_expansions() -> usize {
    50
}

fn default_boost() -> f32 {
    1.0
}

impl PrefixQuery {
    /// Create a new prefix query
    pub fn new(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            prefix: prefix.into(),
            max_expansions: 50,
            boost: 1.0,
        }
    }

    /// Set the maximum number of terms to expand
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }
}

impl QueryNode for PrefixQuery {
    fn query_type(&self) -> &'static str {
        "prefix"
    }

    fn boost(&self) -> f32 {
        self.boost
    }

    fn to_json(&self) -> Value {
        field_clause(
            "prefix",
            &self.field,
            json!({
                "value": self.prefix,
                "max_expansions": self.max_expansions,
                "boost": self.boost
            }),
        )
    }

    fn clone_box(&self) -> Box<dyn QueryNode> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_query_creation() {
        let query = PrefixQuery::new("content", "prog");
        assert_eq!(query.field, "content");
        assert_eq!(query.prefix, "prog");
        assert_eq!(query.max_expansions, 50);
        assert_eq!(query.boost, 1.0);
    }

    #[test]
    fn test_prefix_query_with_options() {
        let query = PrefixQuery::new("content", "prog")
            .with_max_expansions(100)
            .with_boost(1.5);

        assert_eq!(query.max_expansions, 100);
        assert_eq!(query.boost, 1.5);
    }

    #[test]
    fn test_prefix_query_to_json() {
        let query = PrefixQuery::new("title", "rust");
        let value = query.to_json();
        assert_eq!(value["prefix"]["title"]["value"], "rust");
        assert_eq!(value["prefix"]["title"]["max_expansions"], 50);
    }
}
