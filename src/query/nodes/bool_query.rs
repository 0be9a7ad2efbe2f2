//! Boolean query - combines multiple clauses with AND, OR, NOT semantics

use serde_json::{json, Map, Value};

use crate::query::ast::{clause, QueryNode};
use crate::query::types::MinimumShouldMatch;

/// Boolean query combining multiple clauses
///
/// The boolean query supports four types of clauses:
/// - `must`: All clauses must match (AND). Contributes to score.
/// - `should`: At least one clause should match (OR). Contributes to score.
/// - `must_not`: No clause must match (NOT). Does not contribute to score.
/// - `filter`: All clauses must match (AND). Does not contribute to score.
///
/// # Example
///
/// ```json
/// {
///   "bool": {
///     "must": [
///       { "match": { "content": "rust programming" } }
///     ],
///     "filter": [
///       { "range": { "created_at": { "gte": "2024-01-01" } } }
///     ]
///   }
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoolQuery {
    /// Clauses that must match (AND, scoring)
    pub must: Vec<Box<dyn QueryNode>>,
    /// Clauses where at least one should match (OR, scoring)
    pub should: Vec<Box<dyn QueryNode>>,
    /// Clauses that must not match (NOT, no scoring)
    pub must_not: Vec<Box<dyn QueryNode>>,
    /// Clauses that must match (AND, no scoring)
    pub filter: Vec<Box<dyn QueryNode>>,
    /// Minimum number of should clauses that must match
    pub minimum_should_match: MinimumShouldMatch,
    /// Boost factor for scoring
    pub boost: f32,
}

impl BoolQuery {
    /// Create a new empty boolean query
    pub fn new() -> Self {
        Self {
            must: Vec::new(),
            should: Vec::new(),
            must_not: Vec::new(),
            filter: Vec::new(),
            minimum_should_match: MinimumShouldMatch::default(),
            boost: 1.0,
        }
    }

    /// Add a must clause
    pub fn must(mut self, query: impl QueryNode + 'static) -> Self {
        self.must.push(Box::new(query));
        self
    }

    /// Add a should clause
    pub fn should(mut self, query: impl QueryNode + 'static) -> Self {
        self.should.push(Box::new(query));
        self
    }

    /// Add a must_not clause
    pub fn must_not(mut self, query: impl QueryNode + 'static) -> Self {
        self.must_not.push(Box::new(query));
        self
    }

    /// Add a filter clause
    pub fn filter(mut self, query: impl QueryNode + 'static) -> Self {
        self.filter.push(Box::new(query));
        self
    }

    /// Add a must clause (boxed)
    pub fn must_boxed(mut self, query: Box<dyn QueryNode>) -> Self {
        self.must.push(query);
        self
    }

    /// Add a should clause (boxed)
    pub fn should_boxed(mut self, query: Box<dyn QueryNode>) -> Self {
        self.should.push(query);
        self
    }

    /// Add a must_not clause (boxed)
    pub fn must_not_boxed(mut self, query: Box<dyn QueryNode>) -> Self {
        self.must_not.push(query);
        self
    }

    /// Add a filter clause (boxed)
    pub fn filter_boxed(mut self, query: Box<dyn QueryNode>) -> Self {
        self.filter.push(query);
        self
    }

    /// Set minimum should match
    pub fn with_minimum_should_match(mut self, msm: MinimumShouldMatch) -> Self {
        self.minimum_should_match = msm;
        self
    }

    /// Set boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Check if this is an empty query
    pub fn is_empty(&self) -> bool {
        self.must.is_empty()
            && self.should.is_empty()
            && self.must_not.is_empty()
            && self.filter.is_empty()
    }

    /// Get total number of clauses
    pub fn clause_count(&self) -> usize {
        self.must.len() + self.should.len() + self.must_not.len() + self.filter.len()
    }
}

fn clause_array(clauses: &[Box<dyn QueryNode>]) -> Value {
    Value::Array(clauses.iter().map(|q| q.to_json()).collect())
}

impl QueryNode for BoolQuery {
    fn query_type(&self) -> &'static str {
        "bool"
    }

    fn boost(&self) -> f32 {
        self.boost
    }

    fn is_scoring(&self) -> bool {
        // Bool query scores if any must or should clause scores
        self.must.iter().any(|q| q.is_scoring()) || self.should.iter().any(|q| q.is_scoring())
    }

    fn to_json(&self) -> Value {
        let mut body = Map::new();
        if !self.must.is_empty() {
            body.insert("must".to_string(), clause_array(&self.must));
        }
        if !self.should.is_empty() {
            body.insert("should".to_string(), clause_array(&self.should));
            body.insert(
                "minimum_should_match".to_string(),
                self.minimum_should_match.to_json(),
            );
        }
        if !self.must_not.is_empty() {
            body.insert("must_not".to_string(), clause_array(&self.must_not));
        }
        if !self.filter.is_empty() {
            body.insert("filter".to_string(), clause_array(&self.filter));
        }
        body.insert("boost".to_string(), json!(self.boost));
        clause("bool", Value::Object(body))
    }

    fn clone_box(&self) -> Box<dyn QueryNode> {
        Box::new(BoolQuery {
            must: self.must.iter().map(|q| q.clone_box()).collect(),
            should: self.should.iter().map(|q| q.clone_box()).collect(),
            must_not: self.must_not.iter().map(|q| q.clone_box()).collect(),
            filter: self.filter.iter().map(|q| q.clone_box()).collect(),
            minimum_should_match: self.minimum_should_match.clone(),
            boost: self.boost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::nodes::{MatchQuery, RangeQuery, TermQuery};

    #[test]
    fn test_bool_query_creation() {
        let query = BoolQuery::new()
            .must(MatchQuery::new("content", "rust"))
            .should(TermQuery::new("tags", "tutorial"))
            .must_not(TermQuery::new("status", "draft"))
            .filter(RangeQuery::new("year").gte(2024));

        assert_eq!(query.must.len(), 1);
        assert_eq!(query.should.len(), 1);
        assert_eq!(query.must_not.len(), 1);
        assert_eq!(query.filter.len(), 1);
        assert_eq!(query.clause_count(), 4);
    }

    #[test]
    fn test_bool_query_empty() {
        let query = BoolQuery::new();
        assert!(query.is_empty());
        assert_eq!(query.clause_count(), 0);
    }

    #[test]
    fn test_bool_query_minimum_should_match() {
        let query = BoolQuery::new()
            .should(TermQuery::new("tags", "rust"))
            .should(TermQuery::new("tags", "programming"))
            .should(TermQuery::new("tags", "tutorial"))
            .with_minimum_should_match(MinimumShouldMatch::Count(2));

        assert_eq!(query.minimum_should_match.calculate(3), 2);
    }

    #[test]
    fn test_bool_query_type() {
        let query = BoolQuery::new();
        assert_eq!(query.query_type(), "bool");
    }

    #[test]
    fn test_bool_query_scoring() {
        let scoring_query = BoolQuery::new().must(MatchQuery::new("content", "rust"));
        let non_scoring_query = BoolQuery::new().filter(RangeQuery::new("year").gte(2024));

        assert!(scoring_query.is_scoring());
        assert!(!non_scoring_query.is_scoring());
    }

    #[test]
    fn test_bool_query_clone() {
        let query = BoolQuery::new()
            .must(MatchQuery::new("content", "rust"))
            .with_boost(2.0);

        let cloned = query.clone_box();
        assert_eq!(cloned.query_type(), "bool");
        assert_eq!(cloned.boost(), 2.0);
    }

    #[test]
    fn test_bool_query_to_json_omits_empty_sections() {
        let query = BoolQuery::new().must(TermQuery::new("status", "published"));
        let value = query.to_json();

        assert_eq!(value["bool"]["must"].as_array().unwrap().len(), 1);
        assert!(value["bool"].get("should").is_none());
        assert!(value["bool"].get("must_not").is_none());
        assert!(value["bool"].get("filter").is_none());
    }
}
