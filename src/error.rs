use thiserror::Error;

/// Main error type for Trawl operations
#[derive(Error, Debug)]
pub enum TrawlError {
    #[error("Unsupported query clause: {0}")]
    UnsupportedClause(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Result type alias for Trawl operations
pub type Result<T> = std::result::Result<T, TrawlError>;

impl TrawlError {
    /// Check if this error is a clause-dispatch miss rather than a malformed body
    ///
    /// Dispatch misses indicate a configuration/input mismatch (the registry has
    /// no provider for the clause kind); they are never transient and never
    /// worth retrying with the same input.
    pub fn is_unsupported_clause(&self) -> bool {
        matches!(self, TrawlError::UnsupportedClause(_))
    }
}
