//! sitegen-core - text span and HTML node model
//!
//! This crate provides the data structures shared by the Markdown front end
//! (`sitegen`) and anything that wants to build or render HTML trees directly.
//!
//! # Architecture
//!
//! ```text
//! Markdown ──tokenize──▶ TextSpan ──build──▶ ┌──────────┐
//!                                            │ HtmlNode │ ──render──▶ HTML fragment
//! Markdown ──segment───▶ blocks ───build───▶ └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use sitegen_core::HtmlNode;
//!
//! let tree = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::text("Some "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::text(" text"),
//!     ],
//! );
//!
//! assert_eq!(tree.render().unwrap(), "<p>Some <b>bold</b> text</p>");
//! ```

mod node;
mod span;

pub use node::{Attributes, HtmlNode};
pub use span::{SpanKind, TextSpan};

/// Errors raised while rendering an [`HtmlNode`] tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node has no value")]
    MissingValue,

    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node <{0}> has no children")]
    MissingChildren(String),
}
