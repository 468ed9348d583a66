//! # Debrief
//!
//! Human-readable reports over accumulated validation failures. A
//! validation framework hands over its raw per-field error records;
//! debrief normalizes them into structured, immutable details and renders
//! them as plain text, styled terminal output, or JSON-friendly objects,
//! with lightweight filter/group/count queries on top.
//!
//! ## Core Types
//!
//! - [`FieldPath`]: canonical paths to failing fields (e.g., `users[0].email`)
//! - [`ValidationFailure`] / [`RawError`]: the raw failure surface a framework fills in
//! - [`ErrorDetail`]: one normalized, immutable error record
//! - [`FormatOptions`]: toggles for the optional report lines
//!
//! ## Example
//!
//! ```rust
//! use debrief::{explain, format_errors, FieldPath, FormatOptions, RawError, ValidationFailure};
//!
//! let failure = ValidationFailure::new("User").with_error(RawError::new(
//!     FieldPath::from_field("name"),
//!     "Field required",
//!     "missing",
//! ));
//!
//! // Structured view
//! let details = explain(&failure);
//! assert_eq!(details[0].path, "name");
//!
//! // Plain-text report
//! let report = format_errors(&failure, &FormatOptions::default());
//! assert!(report.starts_with("Validation failed for User with 1 error"));
//! ```

pub mod error;
pub mod failure;
pub mod path;
pub mod query;
pub mod report;

pub use error::{ErrorDetail, InputValue};
pub use failure::{explain, RawError, ValidationFailure};
pub use path::{FieldPath, PathSegment};
pub use query::{count_errors, filter_errors, group_errors, QueryError};
pub use report::{format_error_detail, format_errors, format_errors_styled, FormatOptions};
