//! # sitegen
//!
//! Convert Markdown documents into HTML trees and whole static sites.
//!
//! ## Pipeline
//!
//! A document is split into blocks on blank lines, each block is classified
//! (heading, code, quote, lists, paragraph) and turned into an [`HtmlNode`]
//! subtree. Inline content is tokenized into [`TextSpan`]s first. The root of
//! every document is a `div`.
//!
//! The supported syntax is deliberately small: `**bold**`, `_italic_`,
//! `` `code` ``, `[links](url)` and `![images](url)`. Emphasis does not nest
//! and delimiters cannot be escaped.
//!
//! ## Example
//!
//! ```rust
//! use sitegen::{extract_title, markdown_to_html};
//!
//! let markdown = "# Heading\n\nSome **bold** text";
//!
//! let html = markdown_to_html(markdown).unwrap();
//! assert_eq!(html, "<div><h1>Heading</h1><p>Some <b>bold</b> text</p></div>");
//! assert_eq!(extract_title(markdown).unwrap(), "Heading");
//! ```
//!
//! ## Sites
//!
//! [`build_site`] copies static assets and renders every `.md` file under the
//! content directory through an HTML template. See [`SiteOptions`].

mod assets;
pub mod block;
mod builder;
pub mod inline;
mod options;
mod page;

use std::path::PathBuf;

pub use assets::{copy_static, AssetEvent, LogReporter, Reporter};
pub use block::BlockKind;
pub use builder::{extract_title, markdown_to_html, markdown_to_html_node, span_to_node};
pub use options::{SiteOptions, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER};
pub use page::{
    build_site, fill_template, generate_page, generate_pages_recursive, relativize_links,
    BuildReport,
};
pub use sitegen_core::{Attributes, HtmlNode, RenderError, SpanKind, TextSpan};

/// Error type for sitegen operations
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("invalid markdown, {kind} section not closed: {markup}")]
    UnclosedMarkup { kind: SpanKind, markup: String },

    #[error("no title in markdown found")]
    NoTitleFound,

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| SiteError::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
