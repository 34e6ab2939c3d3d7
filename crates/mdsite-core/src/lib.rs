//! mdsite-core - HTML element tree and serialization
//!
//! This crate provides the generic HTML node tree produced by the `mdsite`
//! Markdown renderer, together with its serializer.
//!
//! # Architecture
//!
//! ```text
//! Markdown ──mdsite──▶ ┌───────────────┐
//!                      │ HtmlNode tree │ ──▶ HTML String
//!                      └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::HtmlNode;
//!
//! let node = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::text("This is "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::text(" text."),
//!     ],
//! );
//!
//! assert_eq!(node.to_html().unwrap(), "<p>This is <b>bold</b> text.</p>");
//! ```

mod node;
mod serialize;

pub use node::{Attributes, HtmlNode};
pub use serialize::{is_void, serialize, VOID_ELEMENTS};

/// Structural violations found while serializing an element tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("Invalid HTML: element requires a tag")]
    MissingTag,

    #[error("Invalid HTML: <{tag}> has no children")]
    NoChildren { tag: String },
}

pub type Result<T> = std::result::Result<T, HtmlError>;
