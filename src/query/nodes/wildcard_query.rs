//! Wildcard query - matches terms using wildcards
//!
//! Supports:
//! - `*` - matches any sequence of characters
//! - `?` - matches any single character

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::TrawlError;
use crate::query::ast::{field_clause, QueryNode};
use crate::Result;

/// Query that matches terms using wildcard patterns
///
/// The pattern can include:
/// - `*` to match any sequence of characters (including empty)
/// - `?` to match exactly one character
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WildcardQuery {
    /// Field to search in
    pub field: String,
    /// Wildcard pattern
    pub pattern: String,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f32,
}

fn default_boost() -> f32 {
    1.0
}

impl WildcardQuery {
    /// Create a new wildcard query
    pub fn new(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pattern: pattern.into(),
            boost: 1.0,
        }
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Check that the pattern compiles to a valid matcher
    ///
    /// Called at translation time so that no node with an uncompilable
    /// pattern escapes the builder.
    pub fn validate(&self) -> Result<()> {
        self.pattern_to_regex().map(|_| ())
    }

    /// Convert the wildcard pattern to a compiled regex
    pub fn pattern_to_regex(&self) -> Result<Regex> {
        let mut regex_pattern = String::new();
        regex_pattern.push('^');

        for ch in self.pattern.chars() {
            match ch {
                '*' => regex_pattern.push_str(".*"),
                '?' => regex_pattern.push('.'),
                // Escape regex special characters
                '.' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\' => {
                    regex_pattern.push('\\');
                    regex_pattern.push(ch);
                }
                _ => regex_pattern.push(ch),
            }
        }

        regex_pattern.push('$');

        Regex::new(&regex_pattern).map_err(|e| {
            TrawlError::InvalidQuery(format!("invalid wildcard pattern: {}", e))
        })
    }

    /// Check if the pattern has any wildcards
    pub fn has_wildcards(&self) -> bool {
        self.pattern.contains('*') || self.pattern.contains('?')
    }
}

impl QueryNode for WildcardQuery {
    fn query_type(&self) -> &'static str {
        "wildcard"
    }

    fn boost(&self) -> f32 {
        self.boost
    }

    fn to_json(&self) -> Value {
        field_clause(
            "wildcard",
            &self.field,
            json!({ "value": self.pattern, "boost": self.boost }),
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
    fn test_wildcard_query_creation() {
        let query = WildcardQuery::new("title", "prog*");
        assert_eq!(query.field, "title");
        assert_eq!(query.pattern, "prog*");
        assert_eq!(query.boost, 1.0);
    }

    #[test]
    fn test_pattern_to_regex() {
        let query = WildcardQuery::new("title", "prog*");
        let regex = query.pattern_to_regex().unwrap();
        assert!(regex.is_match("programming"));
        assert!(regex.is_match("prog"));
        assert!(!regex.is_match("a programming"));
    }

    #[test]
    fn test_single_char_wildcard() {
        let query = WildcardQuery::new("title", "te?t");
        let regex = query.pattern_to_regex().unwrap();
        assert!(regex.is_match("test"));
        assert!(regex.is_match("text"));
        assert!(!regex.is_match("tet"));
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let query = WildcardQuery::new("title", "a.b*");
        let regex = query.pattern_to_regex().unwrap();
        assert!(regex.is_match("a.bc"));
        assert!(!regex.is_match("axbc"));
    }

    #[test]
    fn test_has_wildcards() {
        assert!(WildcardQuery::new("f", "a*").has_wildcards());
        assert!(WildcardQuery::new("f", "a?b").has_wildcards());
        assert!(!WildcardQuery::new("f", "abc").has_wildcards());
    }

    #[test]
    fn test_wildcard_query_to_json() {
        let query = WildcardQuery::new("title", "prog*").with_boost(2.0);
        let value = query.to_json();
        assert_eq!(value["wildcard"]["title"]["value"], "prog*");
        assert_eq!(value["wildcard"]["title"]["boost"], 2.0);
    }
}
