//! The normalized error record type.
//!
//! This module provides [`ErrorDetail`], the canonical immutable view of a
//! single validation failure, and [`InputValue`], the tri-state snapshot of
//! the offending input.

use std::fmt::{self, Display};

use serde_json::{Map, Value};

/// Snapshot of the input value that failed validation.
///
/// The raw error record may carry no snapshot at all, which is different
/// from carrying a present `null`. A plain `Option` invites collapsing
/// `null`/`0`/`""` into "absent", so the distinction is kept as its own
/// sum type: [`InputValue::Unset`] means the record had no snapshot, while
/// `InputValue::Value(Value::Null)` means the input really was null.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputValue {
    /// No input snapshot was supplied.
    #[default]
    Unset,
    /// The input as originally supplied, including `null`, `0`, or `""`.
    Value(Value),
}

impl InputValue {
    /// Returns true if a snapshot is present (even a null or falsy one).
    pub fn is_set(&self) -> bool {
        matches!(self, InputValue::Value(_))
    }

    /// Returns the snapshot value, or None when unset.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            InputValue::Unset => None,
            InputValue::Value(v) => Some(v),
        }
    }
}

impl From<Value> for InputValue {
    fn from(value: Value) -> Self {
        InputValue::Value(value)
    }
}

/// A single normalized validation error.
///
/// `ErrorDetail` captures everything known about one failure:
/// - **path**: canonical location string, e.g. `addresses[1].zipcode`
/// - **message**: human-readable description of the failure
/// - **error_type**: stable short code, e.g. `missing`, `string_too_short`
/// - **input_value**: the offending input, when a snapshot was supplied
/// - **context**: auxiliary parameters for the failure kind (e.g. `min_length`)
/// - **url**: documentation reference, when available
///
/// Details are plain values: every field is set at construction and never
/// mutated, and equality is field-wise.
///
/// # Example
///
/// ```rust
/// use debrief::ErrorDetail;
/// use serde_json::json;
///
/// let detail = ErrorDetail::new("age", "Input should be positive", "greater_than")
///     .with_input(json!(-5))
///     .with_context_entry("gt", json!(0));
///
/// assert_eq!(detail.path, "age");
/// assert_eq!(detail.to_json()["input_value"], json!(-5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    /// Canonical path to the field that failed validation.
    pub path: String,
    /// Human-readable error message.
    pub message: String,
    /// Machine-readable error type code (e.g., `missing`).
    pub error_type: String,
    /// The input that failed validation, if a snapshot was supplied.
    pub input_value: InputValue,
    /// Auxiliary parameters for this failure kind; empty when none apply.
    pub context: Map<String, Value>,
    /// Documentation reference; empty when unavailable.
    pub url: String,
}

impl ErrorDetail {
    /// Creates a new detail with the given path, message, and type code.
    ///
    /// The input snapshot defaults to unset, the context to empty, and the
    /// url to empty. Use the `with_` methods to fill them in.
    pub fn new(
        path: impl Into<String>,
        message: impl Into<String>,
        error_type: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            error_type: error_type.into(),
            input_value: InputValue::Unset,
            context: Map::new(),
            url: String::new(),
        }
    }

    /// Sets the input snapshot and returns self for chaining.
    pub fn with_input(mut self, input: impl Into<Value>) -> Self {
        self.input_value = InputValue::Value(input.into());
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

    /// Converts this detail to a JSON-friendly object.
    ///
    /// `path`, `message`, and `error_type` are always present.
    /// `input_value` is included whenever a snapshot is set, even a falsy
    /// one (`0`, `""`, `false`, `null`); only an unset snapshot is omitted.
    /// `context` and `url` are included only when non-empty.
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        out.insert("path".to_string(), Value::String(self.path.clone()));
        out.insert("message".to_string(), Value::String(self.message.clone()));
        out.insert(
            "error_type".to_string(),
            Value::String(self.error_type.clone()),
        );
        if let InputValue::Value(v) = &self.input_value {
            out.insert("input_value".to_string(), v.clone());
        }
        if !self.context.is_empty() {
            out.insert("context".to_string(), Value::Object(self.context.clone()));
        }
        if !self.url.is_empty() {
            out.insert("url".to_string(), Value::String(self.url.clone()));
        }
        Value::Object(out)
    }
}

impl Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl std::error::Error for ErrorDetail {}

// ErrorDetail is Send + Sync since all fields are owned types.
// This is automatically derived, but we add these assertions to ensure
// it remains true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorDetail>();
    assert_sync::<ErrorDetail>();
};
