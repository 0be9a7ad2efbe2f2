//! Query DSL translation engine
//!
//! This module turns a JSON query DSL into a tree of backend-native query
//! nodes. The syntax is compatible with a subset of Elasticsearch Query DSL:
//! - Boolean queries (AND, OR, NOT)
//! - Term/terms queries (exact match)
//! - Match and phrase queries (full-text search)
//! - Range queries (numeric/date ranges)
//! - Prefix, wildcard, and fuzzy queries (term expansion)
//!
//! Clause kinds are resolved through an ordered registry of providers, so
//! new kinds can be added by registering a [`ClauseProvider`] without
//! touching the tree builder.
//!
//! # Example
//!
//! ```json
//! {
//!   "bool": {
//!     "must": [
//!       { "match": { "content": "rust programming" } }
//!     ],
//!     "filter": [
//!       { "range": { "created_at": { "gte": "2024-01-01" } } }
//!     ]
//!   }
//! }
//! ```

pub mod ast;
pub mod builder;
pub mod context;
pub mod nodes;
pub mod provider;
pub mod providers;
pub mod registry;
pub mod types;

pub use ast::QueryNode;
pub use builder::QueryTreeBuilder;
pub use context::TranslationContext;
pub use nodes::{
    AllDocsQuery, BoolQuery, FuzzyQuery, MatchQuery, PhraseQuery, PrefixQuery, RangeQuery,
    TermQuery, TermsQuery, WildcardQuery,
};
pub use provider::ClauseProvider;
pub use registry::ClauseRegistry;
pub use types::*;
