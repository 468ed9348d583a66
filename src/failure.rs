//! The raw validation failure surface and the error normalizer.
//!
//! A validation framework hands over one [`ValidationFailure`]: the display
//! name of the failing subject plus an ordered collection of [`RawError`]
//! records. [`explain`] turns that collection into normalized
//! [`ErrorDetail`] values, one per record, in order.

use std::fmt::{self, Display};

use serde_json::{Map, Value};

use crate::error::{ErrorDetail, InputValue};
use crate::path::FieldPath;
use crate::report::{format_errors, FormatOptions};

/// One raw per-field error record, as produced by a validation framework.
///
/// Only the location, message, and type code are mandatory; the input
/// snapshot, context mapping, and documentation url default to their
/// absent/empty equivalents.
///
/// # Example
///
/// ```rust
/// use debrief::{FieldPath, RawError};
/// use serde_json::json;
///
/// let raw = RawError::new(
///     FieldPath::from_field("value"),
///     "String should have at least 2 characters",
///     "string_too_short",
/// )
/// .with_input(json!("x"))
/// .with_context_entry("min_length", json!(2));
///
/// assert_eq!(raw.error_type, "string_too_short");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawError {
    /// Location of the failing field as a segment sequence.
    pub loc: FieldPath,
    /// Human-readable error message.
    pub message: String,
    /// Machine-readable error type code (e.g., `missing`).
    pub error_type: String,
    /// Snapshot of the offending input, when the framework supplied one.
    pub input: InputValue,
    /// Auxiliary parameters for this failure kind.
    pub context: Map<String, Value>,
    /// Documentation reference for this error type.
    pub url: String,
}

impl RawError {
    /// Creates a new raw record with the given location, message, and type code.
    pub fn new(
        loc: FieldPath,
        message: impl Into<String>,
        error_type: impl Into<String>,
    ) -> Self {
        Self {
            loc,
            message: message.into(),
            error_type: error_type.into(),
            input: InputValue::Unset,
            context: Map::new(),
            url: String::new(),
        }
    }

    /// Sets the input snapshot and returns self for chaining.
    pub fn with_input(mut self, input: impl Into<Value>) -> Self {
        self.input = InputValue::Value(input.into());
        self
    }

    /// Adds one context entry and returns self for chaining.
    pub fn with_context_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets the documentation url and returns self for chaining.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// An accumulated validation failure for one subject.
///
/// Carries the subject's display name (used in report headers) and the
/// ordered raw error records. The collection may legally be empty; renderers
/// then produce a header reporting `0 errors`.
///
/// # Example
///
/// ```rust
/// use debrief::{explain, FieldPath, RawError, ValidationFailure};
///
/// let failure = ValidationFailure::new("User").with_error(RawError::new(
///     FieldPath::from_field("name"),
///     "Field required",
///     "missing",
/// ));
///
/// let details = explain(&failure);
/// assert_eq!(details.len(), 1);
/// assert_eq!(details[0].path, "name");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationFailure {
    title: String,
    errors: Vec<RawError>,
}

impl ValidationFailure {
    /// Creates an empty failure for the named subject.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            errors: Vec::new(),
        }
    }

    /// Returns self with one more raw record appended, for chaining.
    pub fn with_error(mut self, error: RawError) -> Self {
        self.errors.push(error);
        self
    }

    /// Appends one raw record.
    pub fn push(&mut self, error: RawError) {
        self.errors.push(error);
    }

    /// Returns the display name of the failing subject.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the number of raw records.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if the failure carries no records.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns an iterator over the raw records, in input order.
    pub fn errors(&self) -> impl Iterator<Item = &RawError> {
        self.errors.iter()
    }
}

impl Display for ValidationFailure {
    /// Renders the plain-text report with default formatting options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_errors(self, &FormatOptions::default()))
    }
}

impl std::error::Error for ValidationFailure {}

// ValidationFailure is Send + Sync since all fields are owned types.
// Asserted so it stays true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationFailure>();
    assert_sync::<ValidationFailure>();
};

/// Normalizes a validation failure into structured [`ErrorDetail`] values.
///
/// The mapping is pure, 1:1, and order-preserving: one detail per raw
/// record, paths computed from each record's location segments, no
/// reordering, deduplication, or filtering.
///
/// # Example
///
/// ```rust
/// use debrief::{explain, FieldPath, RawError, ValidationFailure};
///
/// let failure = ValidationFailure::new("User").with_error(RawError::new(
///     FieldPath::from_field("addresses").push_index(0).push_field("zipcode"),
///     "Field required",
///     "missing",
/// ));
///
/// assert_eq!(explain(&failure)[0].path, "addresses[0].zipcode");
/// ```
pub fn explain(failure: &ValidationFailure) -> Vec<ErrorDetail> {
    failure
        .errors()
        .map(|raw| ErrorDetail {
            path: raw.loc.to_string(),
            message: raw.message.clone(),
            error_type: raw.error_type.clone(),
            input_value: raw.input.clone(),
            context: raw.context.clone(),
            url: raw.url.clone(),
        })
        .collect()
}
