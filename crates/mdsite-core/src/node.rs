//! HTML element tree
//!
//! Rendering produces a tree of [`HtmlNode`]s. A node is either a leaf that
//! carries text or a parent that carries children, never both.

use indexmap::IndexMap;

/// Attributes keyed by name, serialized in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node in the rendered HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text run, wrapped in `tag` when present (`None` emits bare text)
    Leaf {
        tag: Option<String>,
        text: String,
        attributes: Attributes,
    },

    /// Element whose content is a sequence of child nodes
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Create an untagged text leaf
    pub fn text(content: &str) -> Self {
        HtmlNode::Leaf {
            tag: None,
            text: content.to_string(),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf
    pub fn leaf(tag: &str, text: &str) -> Self {
        Self::leaf_with_attrs(tag, text, Vec::new())
    }

    /// Create a tagged leaf with attributes
    pub fn leaf_with_attrs(tag: &str, text: &str, attrs: Vec<(&str, &str)>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            text: text.to_string(),
            attributes: collect_attrs(attrs),
        }
    }

    /// Create a parent element
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self::parent_with_attrs(tag, children, Vec::new())
    }

    /// Create a parent element with attributes
    pub fn parent_with_attrs(
        tag: &str,
        children: Vec<HtmlNode>,
        attrs: Vec<(&str, &str)>,
    ) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attributes: collect_attrs(attrs),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, HtmlNode::Parent { .. })
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Get the attribute map
    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// Set an attribute, keeping its original position if it already exists
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let attributes = match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        };
        attributes.insert(name.to_string(), value.to_string());
    }

    /// Get all child nodes (empty for leaves)
    pub fn children(&self) -> impl Iterator<Item = &HtmlNode> {
        let children: &[HtmlNode] = match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        };
        children.iter()
    }

    /// Get all text content from this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Leaf { text, .. } => text.clone(),
            HtmlNode::Parent { children, .. } => children
                .iter()
                .map(|child| child.text_content())
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
