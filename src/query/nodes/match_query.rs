//! Match query - full-text search with analysis

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::query::ast::{clause, QueryNode};
use crate::query::types::MatchOperator;

/// Query that performs full-text search on a field
///
/// The input text is analyzed (tokenized, lowercased, stemmed) by the
/// backend and the resulting terms are combined with the specified operator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchQuery {
    /// Field to search in
    pub field: String,
    /// Text to search for (will be analyzed)
    pub text: String,
    /// How to combine terms (AND/OR)
    #[serde(default)]
    pub operator: MatchOperator,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f32,
    /// Minimum number of terms that should match (for OR operator)
    #[serde(default)]
    pub minimum_should_match: Option<String>,
    /// Analyzer to use (if not specified, uses field's default analyzer)
    #[serde(default)]
    pub analyzer: Option<String>,
}

fn default_boost() -> f32 {
    1.0
}

impl MatchQuery {
    /// Create a new match query
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            text: text.into(),
            operator: MatchOperator::default(),
            boost: 1.0,
            minimum_should_match: None,
            analyzer: None,
        }
    }

    /// Set the operator to AND (all terms must match)
    pub fn with_and_operator(mut self) -> Self {
        self.operator = MatchOperator::And;
        self
    }

    /// Set the operator to OR (at least one term must match)
    pub fn with_or_operator(mut self) -> Self {
        self.operator = MatchOperator::Or;
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Set minimum should match
    pub fn with_minimum_should_match(mut self, msm: impl Into<String>) -> Self {
        self.minimum_should_match = Some(msm.into());
        self
    }

    /// Set the analyzer
    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }
}

impl QueryNode for MatchQuery {
    fn query_type(&self) -> &'static str {
        "match"
    }

    fn boost(&self) -> f32 {
        self.boost
    }

    fn to_json(&self) -> Value {
        let mut spec = Map::new();
        spec.insert("query".to_string(), json!(self.text));
        spec.insert("operator".to_string(), json!(self.operator.as_str()));
        spec.insert("boost".to_string(), json!(self.boost));
        if let Some(ref msm) = self.minimum_should_match {
            spec.insert("minimum_should_match".to_string(), json!(msm));
        }
        if let Some(ref analyzer) = self.analyzer {
            spec.insert("analyzer".to_string(), json!(analyzer));
        }

        let mut body = Map::new();
        body.insert(self.field.clone(), Value::Object(spec));
        clause("match", Value::Object(body))
    }

    fn clone_box(&self) -> Box<dyn QueryNode> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_query_creation() {
        let query = MatchQuery::new("content", "rust programming");
        assert_eq!(query.field, "content");
        assert_eq!(query.text, "rust programming");
        assert_eq!(query.operator, MatchOperator::Or);
        assert_eq!(query.boost, 1.0);
    }

    #[test]
    fn test_match_query_builders() {
        let query = MatchQuery::new("content", "rust")
            .with_and_operator()
            .with_boost(2.0)
            .with_analyzer("standard")
            .with_minimum_should_match("75%");

        assert_eq!(query.operator, MatchOperator::And);
        assert_eq!(query.boost, 2.0);
        assert_eq!(query.analyzer.as_deref(), Some("standard"));
        assert_eq!(query.minimum_should_match.as_deref(), Some("75%"));
    }

    #[test]
    fn test_match_query_to_json() {
        let query = MatchQuery::new("content", "rust").with_and_operator();
        let value = query.to_json();
        assert_eq!(value["match"]["content"]["query"], "rust");
        assert_eq!(value["match"]["content"]["operator"], "and");
        assert_eq!(value["match"]["content"]["boost"], 1.0);
        assert!(value["match"]["content"].get("analyzer").is_none());
    }
}
