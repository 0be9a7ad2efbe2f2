//! Analyzer capability and registry entries

use std::fmt;
use std::sync::Arc;

/// A text-processing pipeline that converts raw text into searchable tokens
///
/// Implementations must be stateless with respect to calls: analyzing the
/// same input twice yields the same tokens, and concurrent calls require no
/// synchronization.
pub trait Analyzer: Send + Sync {
    /// Convert raw text into index/search tokens
    fn analyze(&self, text: &str) -> Vec<String>;
}

/// Factory producing a fresh analyzer instance on demand
///
/// Factories must be side-effect-free; each call returns an independently
/// usable instance with no mutable state shared across calls.
pub type AnalyzerFactory = Arc<dyn Fn() -> Box<dyn Analyzer> + Send + Sync>;

/// A named analyzer factory held by the registry
#[derive(Clone)]
pub struct AnalyzerEntry {
    name: String,
    factory: AnalyzerFactory,
}

impl AnalyzerEntry {
    /// Create a new entry from a name and a factory
    pub fn new(name: impl Into<String>, factory: AnalyzerFactory) -> Self {
        Self {
            name: name.into(),
            factory,
        }
    }

    /// The name this entry was registered under (original casing preserved)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a fresh analyzer instance
    pub fn create(&self) -> Box<dyn Analyzer> {
        (self.factory)()
    }
}

impl fmt::Debug for AnalyzerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerEntry")
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Analyzer for Upper {
        fn analyze(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(|t| t.to_uppercase()).collect()
        }
    }

    #[test]
    fn test_entry_creates_fresh_instances() {
        let entry = AnalyzerEntry::new("upper", Arc::new(|| Box::new(Upper) as Box<dyn Analyzer>));

        let a = entry.create();
        let b = entry.create();

        assert_eq!(a.analyze("hello world"), vec!["HELLO", "WORLD"]);
        assert_eq!(b.analyze("hello world"), vec!["HELLO", "WORLD"]);
    }

    #[test]
    fn test_entry_name() {
        let entry = AnalyzerEntry::new("Upper", Arc::new(|| Box::new(Upper) as Box<dyn Analyzer>));
        assert_eq!(entry.name(), "Upper");
    }
}
