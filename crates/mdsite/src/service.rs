//! Renderer - the main entry point for Markdown to HTML conversion.

use mdsite_core::HtmlNode;

use crate::options::Options;
use crate::render::{extract_title_with, render_document_with};
use crate::Result;

/// Converts Markdown documents to HTML using a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: Options,
}

impl Renderer {
    /// Create a Renderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Renderer with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Render a document into an element tree
    pub fn render_document(&self, markdown: &str) -> Result<HtmlNode> {
        render_document_with(markdown, &self.options)
    }

    /// Render a document to an HTML fragment
    pub fn render_html(&self, markdown: &str) -> Result<String> {
        Ok(self.render_document(markdown)?.to_html()?)
    }

    /// Text of the first level-1 heading, for use as a page title
    pub fn extract_title(&self, markdown: &str) -> Result<String> {
        extract_title_with(markdown, &self.options)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
