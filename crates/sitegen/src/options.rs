//! Configuration for site generation

use std::path::PathBuf;

/// Placeholder replaced by the page title
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced by the rendered page body
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Options for building a site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Directory tree of Markdown sources
    pub content_dir: PathBuf,

    /// Static assets copied verbatim into the output
    pub static_dir: PathBuf,

    /// HTML template containing the title and content placeholders
    pub template_path: PathBuf,

    /// Output root; removed and recreated on every build
    pub output_dir: PathBuf,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
        }
    }
}
