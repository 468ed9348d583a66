//! Report rendering for validation failures.
//!
//! Two structurally parallel renderers share the same line structure: the
//! plain-text one in [`text`] and the ANSI-styled one in [`styled`].
//! Stripping the styling from the styled output yields the plain-text
//! output byte for byte, which is what keeps the two in sync.

pub mod styled;
pub mod text;

pub use styled::format_errors_styled;
pub use text::{format_error_detail, format_errors};

/// Configuration for error report rendering.
///
/// Immutable after construction; renderers read it, never write it.
///
/// # Example
///
/// ```rust
/// use debrief::FormatOptions;
///
/// let options = FormatOptions::default()
///     .with_show_url(true)
///     .with_show_error_type(true);
///
/// assert!(options.show_input);
/// assert!(options.show_error_type);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Include the `Got:` line echoing the offending input.
    pub show_input: bool,
    /// Include the `See:` line when a documentation url is present.
    pub show_url: bool,
    /// Append the `[error_type]` tag to the message line.
    pub show_error_type: bool,
    /// Maximum rendered length of an input value before truncation.
    pub input_max_length: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            show_input: true,
            show_url: false,
            show_error_type: false,
            input_max_length: 80,
        }
    }
}

impl FormatOptions {
    /// Sets whether the input line is rendered and returns self for chaining.
    pub fn with_show_input(mut self, show: bool) -> Self {
        self.show_input = show;
        self
    }

    /// Sets whether the url line is rendered and returns self for chaining.
    pub fn with_show_url(mut self, show: bool) -> Self {
        self.show_url = show;
        self
    }

    /// Sets whether the error type tag is rendered and returns self for chaining.
    pub fn with_show_error_type(mut self, show: bool) -> Self {
        self.show_error_type = show;
        self
    }

    /// Sets the input truncation limit and returns self for chaining.
    pub fn with_input_max_length(mut self, max_length: usize) -> Self {
        self.input_max_length = max_length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert!(options.show_input);
        assert!(!options.show_url);
        assert!(!options.show_error_type);
        assert_eq!(options.input_max_length, 80);
    }

    #[test]
    fn test_builders_chain() {
        let options = FormatOptions::default()
            .with_show_input(false)
            .with_show_url(true)
            .with_show_error_type(true)
            .with_input_max_length(40);

        assert!(!options.show_input);
        assert!(options.show_url);
        assert!(options.show_error_type);
        assert_eq!(options.input_max_length, 40);
    }
}
