//! Terms query - matches any of a set of exact terms

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::query::ast::{clause, QueryNode};

/// Query that matches documents containing any of the given terms in a field
///
/// Equivalent to a disjunction of term queries over the same field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TermsQuery {
    /// Field to search in
    pub field: String,
    /// Terms to match (any of)
    pub terms: Vec<String>,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f32,
}

fn default_boost() -> f32 {
    1.0
}

impl TermsQuery {
    /// Create a new terms query
    pub fn new(field: impl Into<String>, terms: Vec<String>) -> Self {
        Self {
            field: field.into(),
            terms,
            boost: 1.0,
        }
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }
}

impl QueryNode for TermsQuery {
    fn query_type(&self) -> &'static str {
        "terms"
    }

    fn boost(&self) -> f32 {
        self.boost
    }

    fn to_json(&self) -> Value {
        let mut body = Map::new();
        body.insert(self.field.clone(), json!(self.terms));
        body.insert("boost".to_string(), json!(self.boost));
        clause("terms", Value::Object(body))
    }

    fn clone_box(&self) -> Box<dyn QueryNode> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_query_creation() {
        let query = TermsQuery::new("tags", vec!["rust".to_string(), "tutorial".to_string()]);
        assert_eq!(query.field, "tags");
        assert_eq!(query.terms.len(), 2);
        assert_eq!(query.boost, 1.0);
    }

    #[test]
    fn test_terms_query_with_boost() {
        let query =
            TermsQuery::new("tags", vec!["rust".to_string()]).with_boost(1.5);
        assert_eq!(query.boost, 1.5);
    }

    #[test]
    fn test_terms_query_to_json() {
        let query = TermsQuery::new("tags", vec!["rust".to_string(), "go".to_string()]);
        let value = query.to_json();
        assert_eq!(value["terms"]["tags"], json!(["rust", "go"]));
        assert_eq!(value["terms"]["boost"], 1.0);
    }
}
