//! Standard clause providers
//!
//! One provider per clause kind. Every provider is offered every clause and
//! declines kinds it does not own; a structurally invalid body for an owned
//! kind is a terminal error.

mod all_docs;
mod bool_query;
mod fuzzy;
mod match_query;
mod phrase;
mod prefix;
mod range;
mod term;
mod terms;
mod wildcard;

pub use all_docs::AllDocsClauseProvider;
pub use bool_query::BoolClauseProvider;
pub use fuzzy::FuzzyClauseProvider;
pub use match_query::MatchClauseProvider;
pub use phrase::PhraseClauseProvider;
pub use prefix::PrefixClauseProvider;
pub use range::RangeClauseProvider;
pub use term::TermClauseProvider;
pub use terms::TermsClauseProvider;
pub use wildcard::WildcardClauseProvider;

use serde_json::Value;

use crate::error::TrawlError;
use crate::Result;

/// Extract the single `(field, spec)` pair of a single-field clause body
///
/// A clause body presented to a provider must have exactly one top-level
/// field key; multi-field shorthand is a caller error.
pub(crate) fn single_field<'a>(kind: &str, body: &'a Value) -> Result<(&'a str, &'a Value)> {
    let map = body
        .as_object()
        .ok_or_else(|| TrawlError::InvalidQuery(format!("invalid {} query", kind)))?;

    let mut entries = map.iter();
    let (field, spec) = entries.next().ok_or_else(|| {
        TrawlError::InvalidQuery(format!("{} query must specify a field", kind))
    })?;

    if entries.next().is_some() {
        return Err(TrawlError::InvalidQuery(format!("invalid {} query", kind)));
    }

    Ok((field.as_str(), spec))
}
