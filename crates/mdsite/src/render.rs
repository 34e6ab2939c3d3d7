//! Block and document rendering
//!
//! Converts classified blocks into [`HtmlNode`] trees. Inline content goes
//! through the inline parser; code blocks are emitted verbatim.

use mdsite_core::HtmlNode;
use tracing::{debug, trace};

use crate::block::{classify, heading_level, ordered_marker, split_into_blocks, BlockKind};
use crate::inline::parse_inline_with;
use crate::options::Options;
use crate::{Error, Result};

/// Render a whole document into a `div` holding one element per block
pub fn render_document(markdown: &str) -> Result<HtmlNode> {
    render_document_with(markdown, &Options::default())
}

/// Render a whole document using the given options
pub fn render_document_with(markdown: &str, options: &Options) -> Result<HtmlNode> {
    let blocks = split_into_blocks(markdown);
    debug!(blocks = blocks.len(), "rendering markdown document");

    let children = blocks
        .iter()
        .map(|block| render_block_with(block, classify(block), options))
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("div", children))
}

/// Render a document straight to an HTML string
pub fn render_html(markdown: &str) -> Result<String> {
    Ok(render_document(markdown)?.to_html()?)
}

/// Render one block as the given kind
pub fn render_block(block: &str, kind: BlockKind) -> Result<HtmlNode> {
    render_block_with(block, kind, &Options::default())
}

/// Render one block as the given kind using the given options
pub fn render_block_with(block: &str, kind: BlockKind, options: &Options) -> Result<HtmlNode> {
    trace!(?kind, "rendering block");

    match kind {
        BlockKind::Heading => render_heading(block, options),
        BlockKind::Paragraph => render_paragraph(block, options),
        BlockKind::Code => Ok(render_code(block)),
        BlockKind::Quote => render_quote(block, options),
        BlockKind::UnorderedList => render_unordered_list(block, options),
        BlockKind::OrderedList => render_ordered_list(block, options),
    }
}

/// Text of the first level-1 heading in the document.
///
/// Inline markup is rendered and flattened, so `# **Big** title` yields
/// `Big title`.
pub fn extract_title(markdown: &str) -> Result<String> {
    extract_title_with(markdown, &Options::default())
}

/// Text of the first level-1 heading, parsed with the given options
pub fn extract_title_with(markdown: &str, options: &Options) -> Result<String> {
    for block in split_into_blocks(markdown) {
        if classify(&block) != BlockKind::Heading {
            continue;
        }
        let heading = render_heading(&block, options)?;
        if heading.tag() == Some("h1") {
            return Ok(heading.text_content());
        }
    }
    Err(Error::MissingTitle)
}

fn text_to_children(text: &str, options: &Options) -> Result<Vec<HtmlNode>> {
    Ok(parse_inline_with(text, options)?
        .iter()
        .map(|span| span.to_html_node())
        .collect())
}

fn render_heading(block: &str, options: &Options) -> Result<HtmlNode> {
    let level = heading_level(block).ok_or_else(|| Error::MalformedMarkup {
        markup: block.lines().next().unwrap_or_default().to_string(),
    })?;
    // Skip the hashes and the single space after them
    let text = &block[level + 1..];
    let tag = format!("h{level}");
    Ok(HtmlNode::parent(&tag, text_to_children(text, options)?))
}

fn render_paragraph(block: &str, options: &Options) -> Result<HtmlNode> {
    let lines: Vec<&str> = block.split('\n').collect();
    let text = lines.join(" ");
    Ok(HtmlNode::parent("p", text_to_children(text.trim(), options)?))
}

fn render_code(block: &str) -> HtmlNode {
    let lines: Vec<&str> = block.split('\n').collect();
    // Drop the opening and closing fence lines
    let inner = lines.get(1..lines.len() - 1).unwrap_or_default();
    let code = inner.join("\n");
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", code.trim_end())])
}

fn render_quote(block: &str, options: &Options) -> Result<HtmlNode> {
    let lines: Vec<&str> = block
        .split('\n')
        .map(|line| line.strip_prefix('>').unwrap_or(line).trim())
        .collect();
    let text = lines.join(" ");
    Ok(HtmlNode::parent(
        "blockquote",
        text_to_children(text.trim(), options)?,
    ))
}

fn render_unordered_list(block: &str, options: &Options) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|line| {
            let text = line.strip_prefix('-').unwrap_or(line).trim_start();
            Ok(HtmlNode::parent("li", text_to_children(text, options)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("ul", items))
}

fn render_ordered_list(block: &str, options: &Options) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            let marker = ordered_marker(i);
            let number = marker.trim_end();
            let text = line.strip_prefix(number).unwrap_or(line).trim_start();
            Ok(HtmlNode::parent("li", text_to_children(text, options)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("ol", items))
}
