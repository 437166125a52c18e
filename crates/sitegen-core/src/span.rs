//! Inline text spans
//!
//! A span is the atomic unit produced by inline tokenization: a run of text
//! plus the kind of markup that surrounded it.

use std::fmt;

/// The semantic kind of an inline span
///
/// [`SpanKind::Link`] and [`SpanKind::Image`] spans carry a URL and can only
/// be created through [`TextSpan::link`] and [`TextSpan::image`].
/// [`TextSpan::new`] never panics: given either of those kinds it falls back
/// to [`SpanKind::Plain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Unstyled text
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a URL
    pub fn has_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        };
        f.write_str(name)
    }
}

/// A run of inline text with its kind and, for links and images, a URL.
///
/// The URL is present exactly when the kind is [`SpanKind::Link`] or
/// [`SpanKind::Image`]; the constructors keep it that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    url: Option<String>,
}

impl TextSpan {
    /// Create a span of a kind that carries no URL.
    ///
    /// Link and image spans must be built with [`TextSpan::link`] and
    /// [`TextSpan::image`]. Passing either kind here does not panic; the
    /// span is created as [`SpanKind::Plain`] with no URL. Check
    /// [`SpanKind::has_url`] first when the kind is not known statically.
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        let kind = if kind.has_url() { SpanKind::Plain } else { kind };
        Self {
            content: content.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Check if this span is still untyped text
    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
