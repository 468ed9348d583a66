//! ANSI-styled report rendering.
//!
//! Deliberately mirrors [`text`](crate::report::text) line for line rather
//! than sharing a renderer abstraction; the strip-styling property test
//! keeps the two outputs identical.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::failure::{explain, ValidationFailure};
use crate::report::text::truncated_repr;
use crate::report::FormatOptions;

/// Writes a styled validation report to the given sink.
///
/// Same line structure and content as
/// [`format_errors`](crate::report::text::format_errors), with distinct
/// styles per semantic span: the `Validation failed` header emphasis is
/// bold red, paths are bold cyan, the `[error_type]` tag is dimmed, input
/// text is yellow, and urls are blue underline. Stripping the ANSI
/// sequences recovers the plain-text report exactly.
///
/// # Errors
///
/// Returns any [`io::Error`] raised by the sink; the formatting itself
/// cannot fail.
///
/// # Example
///
/// ```rust
/// use debrief::{format_errors_styled, FieldPath, FormatOptions, RawError, ValidationFailure};
///
/// let failure = ValidationFailure::new("User").with_error(RawError::new(
///     FieldPath::from_field("name"),
///     "Field required",
///     "missing",
/// ));
///
/// let mut sink = Vec::new();
/// format_errors_styled(&failure, &FormatOptions::default(), &mut sink).unwrap();
/// let rendered = String::from_utf8(sink).unwrap();
/// assert!(rendered.contains("Field required"));
/// ```
pub fn format_errors_styled<W: Write>(
    failure: &ValidationFailure,
    options: &FormatOptions,
    out: &mut W,
) -> io::Result<()> {
    let details = explain(failure);

    let count = details.len();
    let plural = if count == 1 { "error" } else { "errors" };
    write!(
        out,
        "{} for {} with {} {}",
        "Validation failed".red().bold(),
        failure.title(),
        count,
        plural
    )?;

    for detail in &details {
        write!(out, "\n\n  {}", detail.path.cyan().bold())?;

        write!(out, "\n    {}", detail.message)?;
        if options.show_error_type {
            write!(out, " {}", format!("[{}]", detail.error_type).dimmed())?;
        }

        if options.show_input {
            if detail.error_type == "missing" {
                write!(out, "\n    Got: {}", "(missing)".yellow())?;
            } else {
                let repr = truncated_repr(&detail.input_value, options.input_max_length);
                write!(out, "\n    Got: {}", repr.yellow())?;
            }
        }

        if options.show_url && !detail.url.is_empty() {
            write!(out, "\n    See: {}", detail.url.blue().underline())?;
        }
    }

    Ok(())
}
