//! Inline span model
//!
//! A [`Span`] is a run of text with a single inline style. Spans are produced
//! by the inline parser and turned into HTML leaves by the renderer.

use std::fmt;

use mdsite_core::HtmlNode;

/// Inline style of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A styled run of inline text.
///
/// `url` is only set for [`SpanKind::Link`] and [`SpanKind::Image`]; for an
/// image, `text` holds the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl Span {
    /// Create a span without a destination
    pub fn new(text: &str, kind: SpanKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: &str) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SpanKind::Link,
            url: Some(url.to_string()),
        }
    }

    pub fn image(alt: &str, url: &str) -> Self {
        Self {
            text: alt.to_string(),
            kind: SpanKind::Image,
            url: Some(url.to_string()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Convert to the HTML leaf that renders this span
    pub fn to_html_node(&self) -> HtmlNode {
        let url = self.url.as_deref().unwrap_or_default();
        match self.kind {
            SpanKind::Plain => HtmlNode::text(&self.text),
            SpanKind::Bold => HtmlNode::leaf("b", &self.text),
            SpanKind::Italic => HtmlNode::leaf("i", &self.text),
            SpanKind::Code => HtmlNode::leaf("code", &self.text),
            SpanKind::Link => HtmlNode::leaf_with_attrs("a", &self.text, vec![("href", url)]),
            SpanKind::Image => HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src", url), ("alt", self.text.as_str())],
            ),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Span({}, {}, {})",
            self.text,
            self.kind,
            self.url.as_deref().unwrap_or("None")
        )
    }
}
