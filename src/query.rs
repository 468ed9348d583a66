//! Filtering, grouping, and counting over normalized errors.
//!
//! All three operations are pure: they borrow a slice of [`ErrorDetail`]
//! values and return fresh containers, leaving the input untouched.

use indexmap::IndexMap;
use regex::Regex;

use crate::error::ErrorDetail;

/// Errors that can occur during query operations.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The supplied path pattern is not a valid regular expression.
    ///
    /// The underlying [`regex::Error`] is passed through unmodified.
    #[error(transparent)]
    InvalidPattern(#[from] regex::Error),
}

/// Filters errors by type code and/or path pattern.
///
/// Supplied criteria combine with AND semantics; an absent criterion
/// imposes no constraint, so calling with `(None, None)` clones the whole
/// sequence. `error_type` is an exact match. `path_pattern` is a regular
/// expression searched anywhere within the path (anchor the pattern itself
/// for prefix/full matches).
///
/// # Errors
///
/// Returns [`QueryError::InvalidPattern`] if `path_pattern` does not compile.
///
/// # Example
///
/// ```rust
/// use debrief::{filter_errors, ErrorDetail};
///
/// let errors = vec![
///     ErrorDetail::new("name", "Field required", "missing"),
///     ErrorDetail::new("addresses[0].zipcode", "Field required", "missing"),
/// ];
///
/// let hits = filter_errors(&errors, None, Some("^addresses")).unwrap();
/// assert_eq!(hits.len(), 1);
/// ```
pub fn filter_errors(
    errors: &[ErrorDetail],
    error_type: Option<&str>,
    path_pattern: Option<&str>,
) -> Result<Vec<ErrorDetail>, QueryError> {
    let pattern = path_pattern.map(Regex::new).transpose()?;

    Ok(errors
        .iter()
        .filter(|e| error_type.map_or(true, |t| e.error_type == t))
        .filter(|e| pattern.as_ref().map_or(true, |re| re.is_match(&e.path)))
        .cloned()
        .collect())
}

/// Groups errors by their top-level path prefix.
///
/// The prefix is the portion of the path before the first `.` or `[`; a
/// path containing neither is its own prefix. For example,
/// `addresses[0].street` and `addresses[1].city` both group under
/// `"addresses"`. Groups appear in first-occurrence order and members keep
/// input order.
pub fn group_errors(errors: &[ErrorDetail]) -> IndexMap<String, Vec<ErrorDetail>> {
    let mut groups: IndexMap<String, Vec<ErrorDetail>> = IndexMap::new();
    for error in errors {
        groups
            .entry(top_level_prefix(&error.path).to_string())
            .or_default()
            .push(error.clone());
    }
    groups
}

/// Counts errors per top-level path prefix.
///
/// Uses the same prefix rule as [`group_errors`] but tallies directly,
/// without materializing the grouped lists.
pub fn count_errors(errors: &[ErrorDetail]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for error in errors {
        *counts
            .entry(top_level_prefix(&error.path).to_string())
            .or_insert(0) += 1;
    }
    counts
}

/// Returns the portion of a path before its first `.` or `[`.
fn top_level_prefix(path: &str) -> &str {
    match path.find(['.', '[']) {
        Some(i) => &path[..i],
        None => path,
    }
}
