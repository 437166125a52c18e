//! HTML node tree and its serialization
//!
//! A tree is built bottom-up from leaves (text with an optional wrapping tag)
//! and parents (a tag wrapping other nodes), then rendered once to a string.

use indexmap::IndexMap;

use crate::RenderError;

/// Attribute name to value, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text content, optionally wrapped in a single element.
    ///
    /// A leaf without a tag renders as its raw value.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },

    /// An element wrapping one or more child nodes
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Create an untagged leaf holding raw text
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create a leaf wrapped in `tag`
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create a parent element
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute, keeping insertion order
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(name.into(), value.into());
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Children of a parent; leaves have none
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Render attributes as ` name="value"` pairs.
    ///
    /// Values are written verbatim; quotes inside a value are not escaped.
    pub fn attributes_to_html(&self) -> String {
        let mut out = String::new();
        write_attributes(self.attributes(), &mut out);
        out
    }

    /// Serialize this node and its descendants to an HTML fragment
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::with_capacity(256);
        render_node(self, &mut out)?;
        Ok(out)
    }
}

fn render_node(node: &HtmlNode, out: &mut String) -> Result<(), RenderError> {
    match node {
        HtmlNode::Leaf {
            tag,
            value,
            attributes,
        } => {
            let value = value.as_deref().ok_or(RenderError::MissingValue)?;
            match tag {
                None => out.push_str(value),
                Some(tag) => {
                    open_tag(tag, attributes, out);
                    out.push_str(value);
                    close_tag(tag, out);
                }
            }
        }

        HtmlNode::Parent {
            tag,
            children,
            attributes,
        } => {
            let tag = tag.as_deref().ok_or(RenderError::MissingTag)?;
            if children.is_empty() {
                return Err(RenderError::MissingChildren(tag.to_string()));
            }
            open_tag(tag, attributes, out);
            for child in children {
                render_node(child, out)?;
            }
            close_tag(tag, out);
        }
    }
    Ok(())
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
