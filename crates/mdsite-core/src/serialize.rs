//! HTML serialization
//!
//! Converts an [`HtmlNode`] tree into an HTML string. Text is emitted
//! verbatim; no escaping is performed.

use crate::node::{Attributes, HtmlNode};
use crate::{HtmlError, Result};

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Serialize a node tree to an HTML string
pub fn serialize(node: &HtmlNode) -> Result<String> {
    let mut output = String::with_capacity(1024);
    serialize_node(node, &mut output)?;
    Ok(output)
}

impl HtmlNode {
    /// Serialize this node and its descendants to HTML
    pub fn to_html(&self) -> Result<String> {
        serialize(self)
    }

    /// Render the attribute list as ` name="value"` pairs
    pub fn attributes_to_html(&self) -> String {
        let mut out = String::new();
        write_attributes(self.attributes(), &mut out);
        out
    }
}

fn serialize_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf {
            tag: None, text, ..
        } => {
            out.push_str(text);
            Ok(())
        }

        HtmlNode::Leaf {
            tag: Some(tag),
            text,
            attributes,
        } => {
            if tag.is_empty() {
                return Err(HtmlError::MissingTag);
            }
            open_tag(tag, attributes, out);
            if !is_void(tag) {
                out.push_str(text);
                close_tag(tag, out);
            }
            Ok(())
        }

        HtmlNode::Parent {
            tag,
            children,
            attributes,
        } => {
            if tag.is_empty() {
                return Err(HtmlError::MissingTag);
            }
            if children.is_empty() {
                return Err(HtmlError::NoChildren { tag: tag.clone() });
            }
            open_tag(tag, attributes, out);
            for child in children {
                serialize_node(child, out)?;
            }
            close_tag(tag, out);
            Ok(())
        }
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    write_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
