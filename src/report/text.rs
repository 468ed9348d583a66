//! Plain-text report rendering.

use crate::error::{ErrorDetail, InputValue};
use crate::failure::{explain, ValidationFailure};
use crate::report::FormatOptions;

/// Formats a validation failure as a human-readable multi-line report.
///
/// The header names the failing subject and the error count (singular
/// `error` only for exactly one); each record's block follows, separated by
/// one blank line, in input order.
///
/// # Example
///
/// ```rust
/// use debrief::{format_errors, FieldPath, FormatOptions, RawError, ValidationFailure};
///
/// let failure = ValidationFailure::new("User").with_error(RawError::new(
///     FieldPath::from_field("name"),
///     "Field required",
///     "missing",
/// ));
///
/// let report = format_errors(&failure, &FormatOptions::default());
/// assert!(report.starts_with("Validation failed for User with 1 error"));
/// assert!(report.contains("Got: (missing)"));
/// ```
pub fn format_errors(failure: &ValidationFailure, options: &FormatOptions) -> String {
    let details = explain(failure);

    let count = details.len();
    let plural = if count == 1 { "error" } else { "errors" };
    let mut out = format!(
        "Validation failed for {} with {} {}",
        failure.title(),
        count,
        plural
    );

    for detail in &details {
        out.push_str("\n\n");
        out.push_str(&format_error_detail(detail, options));
    }

    out
}

/// Formats a single normalized error as its report block.
///
/// The block always holds the path line (two-space indent) and the message
/// line (four-space indent); the input and url lines are option-driven.
pub fn format_error_detail(detail: &ErrorDetail, options: &FormatOptions) -> String {
    let mut lines = vec![format!("  {}", detail.path)];

    let mut message = format!("    {}", detail.message);
    if options.show_error_type {
        message.push_str(&format!(" [{}]", detail.error_type));
    }
    lines.push(message);

    if options.show_input {
        if detail.error_type == "missing" {
            lines.push("    Got: (missing)".to_string());
        } else {
            lines.push(format!(
                "    Got: {}",
                truncated_repr(&detail.input_value, options.input_max_length)
            ));
        }
    }

    if options.show_url && !detail.url.is_empty() {
        lines.push(format!("    See: {}", detail.url));
    }

    lines.join("\n")
}

/// Renders an input snapshot as a bounded debug representation.
///
/// Present values use their JSON form (quoted strings, bracketed arrays,
/// the literal `null`); an unset snapshot renders as `(unset)`. A
/// representation longer than `max_length` characters is cut to
/// `max_length - 3` and suffixed with `...`, so the result is exactly
/// `max_length` characters long.
pub(crate) fn truncated_repr(input: &InputValue, max_length: usize) -> String {
    let repr = match input {
        InputValue::Unset => "(unset)".to_string(),
        InputValue::Value(v) => v.to_string(),
    };
    if repr.chars().count() <= max_length {
        return repr;
    }
    let kept: String = repr.chars().take(max_length.saturating_sub(3)).collect();
    format!("{}...", kept)
}
