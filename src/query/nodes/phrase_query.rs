//! Phrase query - matches terms appearing in order
//!
//! # Example
//!
//! ```rust
//! use trawl::query::nodes::PhraseQuery;
//!
//! let query = PhraseQuery::new("content", "rust programming").with_slop(2);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::query::ast::{field_clause, QueryNode};

/// Query that matches a phrase: the analyzed terms must appear in order
///
/// `slop` is the number of position moves tolerated between terms; slop 0
/// requires the terms to be strictly adjacent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhraseQuery {
    /// Field to search in
    pub field: String,
    /// Phrase to match (will be analyzed)
    pub phrase: String,
    /// Allowed positional slop between terms
    #[serde(default)]
    pub slop: u32,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f32,
}

fn default_boost() -> f32 {
    1.0
}

impl PhraseQuery {
    /// Create a new phrase query with slop 0
    pub fn new(field: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            phrase: phrase.into(),
            slop: 0,
            boost: 1.0,
        }
    }

    /// Set the allowed slop
    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }
}

impl QueryNode for PhraseQuery {
    fn query_type(&self) -> &'static str {
        "phrase"
    }

    fn boost(&self) -> f32 {
        self.boost
    }

    fn to_json(&self) -> Value {
        field_clause(
            "match_phrase",
            &self.field,
            json!({ "query": self.phrase, "slop": self.slop, "boost": self.boost }),
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
    fn test_phrase_query_creation() {
        let query = PhraseQuery::new("content", "rust programming");
        assert_eq!(query.field, "content");
        assert_eq!(query.phrase, "rust programming");
        assert_eq!(query.slop, 0);
        assert_eq!(query.boost, 1.0);
    }

    #[test]
    fn test_phrase_query_with_slop() {
        let query = PhraseQuery::new("content", "rust programming").with_slop(2);
        assert_eq!(query.slop, 2);
    }

    #[test]
    fn test_phrase_query_with_boost() {
        let query = PhraseQuery::new("content", "rust programming").with_boost(2.5);
        assert_eq!(query.boost, 2.5);
    }

    #[test]
    fn test_phrase_query_to_json() {
        let query = PhraseQuery::new("content", "rust programming").with_slop(1);
        let value = query.to_json();
        assert_eq!(value["match_phrase"]["content"]["query"], "rust programming");
        assert_eq!(value["match_phrase"]["content"]["slop"], 1);
    }
}
