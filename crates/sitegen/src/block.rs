//! Block segmentation and classification.

use once_cell::sync::Lazy;
use regex::Regex;

/// Blank line separating two blocks; whitespace-only lines count as blank
static BLOCK_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n").expect("valid separator regex"));

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6} ").expect("valid heading regex"));

static ORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\. ").expect("valid ordered item regex"));

const CODE_FENCE: &str = "```";

/// The kind of a top-level block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into trimmed, non-empty blocks in source order
pub fn segment(markdown: &str) -> Vec<String> {
    let normalized = markdown.replace("\r\n", "\n");
    BLOCK_SEPARATOR_RE
        .split(&normalized)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a block. The first matching rule wins.
pub fn classify(block: &str) -> BlockKind {
    if HEADING_RE.is_match(block) {
        return BlockKind::Heading;
    }

    if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        return BlockKind::Code;
    }

    if block.lines().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if block.lines().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }

    if is_numbered_list(block) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Every line is `<n>. ` and the digits read exactly 1, 2, 3, ...
fn is_numbered_list(block: &str) -> bool {
    block.lines().enumerate().all(|(i, line)| {
        ORDERED_ITEM_RE
            .captures(line)
            .is_some_and(|caps| caps[1] == (i + 1).to_string())
    })
}

/// Heading level of a block already classified as a heading
pub(crate) fn heading_level(block: &str) -> usize {
    block.chars().take_while(|&c| c == '#').count()
}

/// Strip the `<n>. ` marker from an ordered list line
pub(crate) fn strip_ordered_marker(line: &str) -> &str {
    match ORDERED_ITEM_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment() {
        let markdown = "# This is a heading

This is a paragraph of text. It has some **bold** and _italic_ words inside of it.

- This is the first list item in a list block
- This is a list item
- This is another list item";

        assert_eq!(
            segment(markdown),
            vec![
                "# This is a heading",
                "This is a paragraph of text. It has some **bold** and _italic_ words inside of it.",
                "- This is the first list item in a list block\n- This is a list item\n- This is another list item",
            ]
        );
    }

    #[test]
    fn test_segment_collapses_blank_runs() {
        let tight = "one\n\ntwo\n\nthree";
        let loose = "one\n\n\n\n\ntwo\n\n\n\n\nthree";
        assert_eq!(segment(tight), vec!["one", "two", "three"]);
        assert_eq!(segment(tight), segment(loose));
    }

    #[test]
    fn test_segment_trims_and_drops_empty() {
        assert_eq!(segment("\n\n  first  \n\n   \n\nsecond\n\n"), vec!["first", "second"]);
        assert!(segment("").is_empty());
        assert!(segment("\n\n\n").is_empty());
    }

    #[test]
    fn test_segment_crlf() {
        assert_eq!(segment("a\r\nb\r\n\r\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("# Heading 1"), BlockKind::Heading);
        assert_eq!(classify("## Heading 2"), BlockKind::Heading);
        assert_eq!(classify("###### Heading 6"), BlockKind::Heading);
        assert_eq!(classify("```\ncode block\n```"), BlockKind::Code);
        assert_eq!(classify("```python\nprint('hello')\n```"), BlockKind::Code);
        assert_eq!(classify("> Quote line 1\n> Quote line 2"), BlockKind::Quote);
        assert_eq!(
            classify("- List item 1\n- List item 2\n- List item 3"),
            BlockKind::UnorderedList
        );
        assert_eq!(
            classify("1. List item 1\n2. List item 2\n3. List item 3"),
            BlockKind::OrderedList
        );
        assert_eq!(classify("This is a paragraph"), BlockKind::Paragraph);
        assert_eq!(
            classify("This is a paragraph\nwith multiple lines"),
            BlockKind::Paragraph
        );
    }

    #[test]
    fn test_classify_edge_cases() {
        assert_eq!(classify("#Heading"), BlockKind::Paragraph);
        assert_eq!(classify("####### Too deep"), BlockKind::Paragraph);
        assert_eq!(classify("```\ncode"), BlockKind::Paragraph);
        assert_eq!(classify("```"), BlockKind::Code);
        assert_eq!(
            classify("> Quote line 1\nNot a quote line"),
            BlockKind::Paragraph
        );
        assert_eq!(classify("-List item 1\n-List item 2"), BlockKind::Paragraph);
        assert_eq!(classify("1. List item 1\n3. List item 2"), BlockKind::Paragraph);
        assert_eq!(classify("1 List item 1\n2 List item 2"), BlockKind::Paragraph);
        assert_eq!(classify("2. Starts at two\n3. Next"), BlockKind::Paragraph);
        assert_eq!(classify("1. one\n1. one again"), BlockKind::Paragraph);
        assert_eq!(classify("01. a\n02. b"), BlockKind::Paragraph);
        assert_eq!(classify("1. a\n02. b"), BlockKind::Paragraph);
    }

    #[test]
    fn test_heading_wins_over_other_rules() {
        assert_eq!(classify("# Title\n- not a list"), BlockKind::Heading);
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("# One"), 1);
        assert_eq!(heading_level("###### Six"), 6);
    }

    #[test]
    fn test_strip_ordered_marker() {
        assert_eq!(strip_ordered_marker("12. twelve"), "twelve");
        assert_eq!(strip_ordered_marker("no marker"), "no marker");
    }
}
