//! Query node trait
//!
//! This module defines the core `QueryNode` trait that all query types
//! implement. Nodes form a tree representing the logical structure of a
//! search query; every node handed back to a caller is fully built and
//! immediately executable by the backend. No partially-initialized nodes
//! escape translation.

use serde_json::{Map, Value};
use std::fmt::Debug;

/// Core trait for all query nodes in the tree
pub trait QueryNode: Send + Sync + Debug {
    /// Get the query type name for debugging and logging
    fn query_type(&self) -> &'static str;

    /// Get the boost factor for this query
    fn boost(&self) -> f32 {
        1.0
    }

    /// Whether this query contributes to relevance scoring (vs just filtering)
    fn is_scoring(&self) -> bool {
        true
    }

    /// Canonical DSL form of this node, with defaulted modifiers materialized
    ///
    /// Translating the returned value again yields a structurally identical
    /// node; this is the surface the backend exposes for inspecting the
    /// semantic parameters of a built tree.
    fn to_json(&self) -> Value;

    /// Clone this query node into a boxed trait object
    fn clone_box(&self) -> Box<dyn QueryNode>;
}

impl Clone for Box<dyn QueryNode> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Wrap a clause body under its kind key: `{"<kind>": body}`
pub(crate) fn clause(kind: &str, body: Value) -> Value {
    let mut root = Map::new();
    root.insert(kind.to_string(), body);
    Value::Object(root)
}

/// Wrap a per-field spec under kind and field keys: `{"<kind>": {"<field>": spec}}`
pub(crate) fn field_clause(kind: &str, field: &str, spec: Value) -> Value {
    let mut inner = Map::new();
    inner.insert(field.to_string(), spec);
    clause(kind, Value::Object(inner))
}
