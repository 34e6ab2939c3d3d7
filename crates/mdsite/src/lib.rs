//! # mdsite
//!
//! Convert Markdown documents to HTML for static sites.
//!
//! ## Design
//!
//! Conversion runs in one direction and keeps no state between calls:
//!
//! ```text
//! document ──▶ blocks ──▶ inline spans ──▶ HtmlNode tree ──▶ HTML string
//! ```
//!
//! - A document is split on blank lines into blocks.
//! - Each block is classified (heading, code, quote, lists, paragraph) from
//!   its own text alone.
//! - Block text is parsed into styled [`Span`]s (bold, italic, code, links,
//!   images). Nested styling is not supported.
//! - Spans and blocks become an [`HtmlNode`] tree rooted at a `div`.
//!
//! Reading files, copying assets and filling page templates are left to the
//! caller.
//!
//! ## Example
//!
//! ```rust
//! use mdsite::{extract_title, render_document};
//!
//! let markdown = "# Title\n\nSome **bold** text";
//!
//! let html = render_document(markdown).unwrap().to_html().unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>");
//!
//! assert_eq!(extract_title(markdown).unwrap(), "Title");
//! ```

mod block;
mod inline;
mod options;
mod render;
mod service;
mod span;

pub use block::{classify, split_into_blocks, BlockKind};
pub use inline::{
    extract_images, extract_links, parse_inline, parse_inline_with, split_delimiter,
    split_images, split_links,
};
pub use mdsite_core::{HtmlError, HtmlNode};
pub use options::Options;
pub use render::{
    extract_title, extract_title_with, render_block, render_block_with, render_document,
    render_document_with, render_html,
};
pub use service::Renderer;
pub use span::{Span, SpanKind};

/// Error type for Markdown conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid markdown: unclosed inline delimiter `{delimiter}`")]
    UnclosedDelimiter { delimiter: String },

    #[error("Invalid markdown: malformed markup `{markup}`")]
    MalformedMarkup { markup: String },

    #[error(transparent)]
    Html(#[from] HtmlError),

    #[error("No top-level heading found")]
    MissingTitle,
}

pub type Result<T> = std::result::Result<T, Error>;
