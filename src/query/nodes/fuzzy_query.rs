//! Fuzzy query - matches terms within an edit distance
//!
//! Uses Levenshtein distance to find terms that are similar to the query
//! term.
//!
//! # Example
//!
//! ```rust
//! use trawl::query::nodes::FuzzyQuery;
//!
//! // Find terms within edit distance 1 of "roust" (matches "rust")
//! let query = FuzzyQuery::new("content", "roust").with_fuzziness(1);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::query::ast::{field_clause, QueryNode};

/// Query that matches terms within an edit distance of the query term
///
/// The edit distance counts insertions, deletions, and substitutions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FuzzyQuery {
    /// Field to search in
    pub field: String,
    /// Term to match approximately
    pub term: String,
    /// Maximum edit distance (default: the maximum supported distance)
    #[serde(default = "default_fuzziness")]
    pub fuzziness: u32,
    /// Number of initial characters that must match exactly (default: 0)
    #[serde(default)]
    pub prefix_length: usize,
    /// Maximum number of terms to consider (default: 50)
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f32,
}

fn default_fuzziness() -> u32 {
    FuzzyQuery::MAX_SUPPORTED_DISTANCE
}

fn default_max_expansions() -> usize {
    FuzzyQuery::DEFAULT_MAX_EXPANSIONS
}

fn default_boost() -> f32 {
    1.0
}

impl FuzzyQuery {
    /// Largest edit distance the term automaton supports
    pub const MAX_SUPPORTED_DISTANCE: u32 = 2;

    /// Default cap on candidate term expansion
    pub const DEFAULT_MAX_EXPANSIONS: usize = 50;

    /// Create a new fuzzy query with the maximum supported edit distance
    pub fn new(field: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            term: term.into(),
            fuzziness: Self::MAX_SUPPORTED_DISTANCE,
            prefix_length: 0,
            max_expansions: Self::DEFAULT_MAX_EXPANSIONS,
            boost: 1.0,
        }
    }

    /// Set the maximum edit distance
    pub fn with_fuzziness(mut self, fuzziness: u32) -> Self {
        self.fuzziness = fuzziness;
        self
    }

    /// Set the number of initial characters that must match exactly
    pub fn with_prefix_length(mut self, prefix_length: usize) -> Self {
        self.prefix_length = prefix_length;
        self
    }

    /// Set the maximum number of terms to consider
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Get the prefix that must match exactly
    pub fn required_prefix(&self) -> &str {
        let end = self.prefix_length.min(self.term.len());
        &self.term[..end]
    }
}

impl QueryNode for FuzzyQuery {
    fn query_type(&self) -> &'static str {
        "fuzzy"
    }

    fn boost(&self) -> f32 {
        self.boost
    }

    fn to_json(&self) -> Value {
        field_clause(
            "fuzzy",
            &self.field,
            json!({
                "value": self.term,
                "fuzziness": self.fuzziness,
                "prefix_length": self.prefix_length,
                "max_expansions": self.max_expansions,
                "boost": self.boost
            }),
        )
    }

    fn clone_box(&self) -> Box<dyn QueryNode> {
        Box::new(self.clone())
    }
}
