//! Convert Markdown blocks into an HTML node tree.

use crate::block::{self, BlockKind};
use crate::inline::tokenize;
use crate::{HtmlNode, Result, SiteError, SpanKind, TextSpan};

const CODE_FENCE: &str = "```";

/// Convert a whole document into a `div` rooted tree
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let children = block::segment(markdown)
        .iter()
        .map(String::as_str)
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("div", children))
}

/// Convert a document and render it to an HTML fragment
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Ok(markdown_to_html_node(markdown)?.render()?)
}

/// Find the first level-1 heading block and return its text.
///
/// Only `# ` headings count. The whole block after the marker is returned,
/// including any following lines.
pub fn extract_title(markdown: &str) -> Result<String> {
    block::segment(markdown)
        .into_iter()
        .find_map(|block| {
            block
                .strip_prefix("# ")
                .map(|title| title.trim_start_matches(' ').to_string())
        })
        .ok_or(SiteError::NoTitleFound)
}

/// Convert a single inline span into its leaf node
pub fn span_to_node(span: &TextSpan) -> HtmlNode {
    let content = span.content();
    let url = span.url().unwrap_or_default();
    match span.kind() {
        SpanKind::Plain => HtmlNode::text(content),
        SpanKind::Bold => HtmlNode::leaf("b", content),
        SpanKind::Italic => HtmlNode::leaf("i", content),
        SpanKind::Code => HtmlNode::leaf("code", content),
        SpanKind::Link => HtmlNode::leaf("a", content).with_attribute("href", url),
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", content),
    }
}

fn block_to_node(block: &str) -> Result<HtmlNode> {
    let kind = block::classify(block);
    log::trace!("{kind:?} block: {block:?}");

    match kind {
        BlockKind::Heading => heading_to_node(block),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => list_to_node(block, "ul", |line| {
            line.strip_prefix("- ").unwrap_or(line)
        }),
        BlockKind::OrderedList => list_to_node(block, "ol", block::strip_ordered_marker),
        BlockKind::Paragraph => paragraph_to_node(block),
    }
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(tokenize(text)?.iter().map(span_to_node).collect())
}

fn heading_to_node(block: &str) -> Result<HtmlNode> {
    let level = block::heading_level(block);
    // classification guarantees a space after the marker
    let text = &block[level + 1..];
    Ok(HtmlNode::parent(format!("h{level}"), inline_children(text)?))
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode> {
    let text = block.lines().collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", inline_children(&text)?))
}

fn code_to_node(block: &str) -> HtmlNode {
    let inner = block.strip_prefix(CODE_FENCE).unwrap_or(block);
    let inner = inner.strip_suffix(CODE_FENCE).unwrap_or_default();

    // Drop the rest of the opening fence line (language tag)
    let code = match inner.split_once('\n') {
        Some((_, body)) => body,
        None => inner,
    };

    HtmlNode::parent("pre", vec![HtmlNode::parent("code", vec![HtmlNode::text(code)])])
}

fn quote_to_node(block: &str) -> Result<HtmlNode> {
    let text = block
        .lines()
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::parent("blockquote", inline_children(&text)?))
}

fn list_to_node(block: &str, tag: &str, strip: impl Fn(&str) -> &str) -> Result<HtmlNode> {
    let items = block
        .lines()
        .map(|line| Ok(HtmlNode::parent("li", inline_children(strip(line))?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent(tag, items))
}
