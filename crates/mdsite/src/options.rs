//! Configuration options for Markdown parsing

/// Options for inline parsing.
///
/// Delimiters are applied in a fixed order (bold, italic, code) whatever
/// their values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Bold delimiter
    pub bold_delimiter: String,

    /// Italic delimiter
    pub italic_delimiter: String,

    /// Inline code delimiter
    pub code_delimiter: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bold_delimiter: "**".to_string(),
            italic_delimiter: "_".to_string(),
            code_delimiter: "`".to_string(),
        }
    }
}
