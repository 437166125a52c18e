//! Inline tokenization.
//!
//! Text is turned into [`TextSpan`]s by a fixed sequence of passes, each of
//! which only looks at spans that are still [`SpanKind::Plain`]:
//!
//! 1. `**` delimiters become bold
//! 2. `_` delimiters become italic
//! 3. `` ` `` delimiters become code
//! 4. `![alt](url)` becomes an image
//! 5. `[text](url)` becomes a link
//!
//! Images are extracted before links, otherwise the bracket pair inside an
//! image would be taken for a link.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Result, SiteError, SpanKind, TextSpan};

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid image regex"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid link regex"));

/// Tokenize a run of inline markdown
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, "**", SpanKind::Bold);
    let spans = split_delimiter(spans, "_", SpanKind::Italic);
    let spans = split_delimiter(spans, "`", SpanKind::Code);
    let spans = split_images(spans)?;
    split_links(spans)
}

/// Split plain spans on `delimiter`, turning every odd-indexed piece into
/// a span of `kind`.
///
/// Delimiters are expected to come in pairs. An unpaired delimiter is not
/// reported; the pieces are still assigned by position.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str, kind: SpanKind) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content().split(delimiter).collect();
        if parts.len() == 1 {
            result.push(span);
            continue;
        }

        let last = parts.len() - 1;
        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 1 {
                result.push(TextSpan::new(part, kind));
            } else if !part.is_empty() || i == last {
                // trailing empty text is kept
                result.push(TextSpan::plain(part));
            }
        }
    }

    result
}

/// Find every `![alt](url)` in `text`, left to right
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    Markup::Image.extract(text)
}

/// Find every `[text](url)` in `text`, left to right
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    Markup::Link.extract(text)
}

/// Pull image markup out of plain spans
pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_markup(spans, Markup::Image)
}

/// Pull link markup out of plain spans
pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_markup(spans, Markup::Link)
}

#[derive(Debug, Clone, Copy)]
enum Markup {
    Image,
    Link,
}

impl Markup {
    fn regex(self) -> &'static Regex {
        match self {
            Markup::Image => &*IMAGE_RE,
            Markup::Link => &*LINK_RE,
        }
    }

    fn kind(self) -> SpanKind {
        match self {
            Markup::Image => SpanKind::Image,
            Markup::Link => SpanKind::Link,
        }
    }

    fn extract(self, text: &str) -> Vec<(String, String)> {
        self.regex()
            .captures_iter(text)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
            .collect()
    }

    fn literal(self, label: &str, url: &str) -> String {
        match self {
            Markup::Image => format!("![{label}]({url})"),
            Markup::Link => format!("[{label}]({url})"),
        }
    }

    fn span(self, label: String, url: String) -> TextSpan {
        match self {
            Markup::Image => TextSpan::image(label, url),
            Markup::Link => TextSpan::link(label, url),
        }
    }
}

/// Replace every `(label, url)` match in plain spans with a typed span.
///
/// Each pair is found again as literal markup in the text left over from the
/// previous pair. Since the regex yields whole `[label](url)` matches in
/// order, the literal is always present and `UnclosedMarkup` is only a guard
/// that is not reached through [`tokenize`]; it is kept so a failed lookup
/// is reported instead of producing wrong spans.
fn split_markup(spans: Vec<TextSpan>, markup: Markup) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let pairs = markup.extract(span.content());
        if pairs.is_empty() {
            result.push(span);
            continue;
        }

        let mut rest = span.content();
        for (label, url) in pairs {
            let (before, after) = split_once_literal(rest, &markup.literal(&label, &url), markup)?;
            if !before.is_empty() {
                result.push(TextSpan::plain(before));
            }
            result.push(markup.span(label, url));
            rest = after;
        }

        if !rest.is_empty() {
            result.push(TextSpan::plain(rest));
        }
    }

    Ok(result)
}

fn split_once_literal<'a>(text: &'a str, literal: &str, markup: Markup) -> Result<(&'a str, &'a str)> {
    text.split_once(literal)
        .ok_or_else(|| SiteError::UnclosedMarkup {
            kind: markup.kind(),
            markup: literal.to_string(),
        })
}
