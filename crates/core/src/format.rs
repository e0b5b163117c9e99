//! Derives typed display blocks from raw message text.
//!
//! Assistant replies follow a loose markdown-ish convention: `**bold**`
//! for inline emphasis, `##` or a short fully bold line for headings,
//! `* ` / `- ` / `1.` prefixes for list items. This module classifies
//! each line into one [`Block`] without ever interpreting the text as
//! markup to execute. The derivation is pure: same input, same blocks.

use std::sync::OnceLock;

use regex::Regex;

use crate::conversation::Author;

/// A fully bold line longer than this stays a paragraph.
const HEADING_MAX_CHARS: usize = 80;

/// An inline fragment of a block's text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    /// Unstyled text.
    Plain(String),
    /// Text that was wrapped in `**`.
    Emphasis(String),
}

impl Span {
    /// The fragment's text, without styling.
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Emphasis(text) => text,
        }
    }
}

/// One structurally classified unit of rendered text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// A section heading, marker tokens stripped.
    Heading(Vec<Span>),
    /// A list item, marker prefix stripped.
    Bullet(Vec<Span>),
    /// A plain run of text.
    Paragraph(Vec<Span>),
    /// A blank line.
    Spacer,
}

impl Block {
    /// The block's text with span boundaries erased.
    pub fn text(&self) -> String {
        match self {
            Block::Heading(spans)
            | Block::Bullet(spans)
            | Block::Paragraph(spans) => {
                spans.iter().map(Span::text).collect()
            }
            Block::Spacer => String::new(),
        }
    }
}

fn emphasis_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap())
}

fn numbered_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*").unwrap())
}

/// Derives the display blocks for one message.
///
/// User text is never block-parsed: the whole text becomes a single
/// literal paragraph, whitespace preserved. Assistant text goes
/// through line-level classification.
pub fn message_blocks(author: Author, text: &str) -> Vec<Block> {
    match author {
        Author::User => {
            vec![Block::Paragraph(vec![Span::Plain(text.to_owned())])]
        }
        Author::Assistant => assistant_blocks(text),
    }
}

/// Classifies each line of assistant text into one display block.
///
/// Total over any input: unrecognized patterns degrade to paragraphs,
/// and malformed emphasis markers stay literal text.
pub fn assistant_blocks(text: &str) -> Vec<Block> {
    text.split('\n').map(classify_line).collect()
}

fn classify_line(line: &str) -> Block {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Block::Spacer;
    }

    // Headings: `## ...`, or a standalone short line wholly wrapped in
    // `**`. The bold form takes precedence over bullet detection.
    if trimmed.starts_with("##")
        || (trimmed.starts_with("**")
            && trimmed.ends_with("**")
            && trimmed.chars().count() < HEADING_MAX_CHARS)
    {
        let content = trimmed
            .trim_start_matches('#')
            .trim_start()
            .replace("**", "");
        return Block::Heading(vec![Span::Plain(content)]);
    }

    // List items: `* `, `- `, or a decimal-number-plus-period prefix.
    if let Some(rest) = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
    {
        return Block::Bullet(inline_spans(rest.trim_start()));
    }
    if let Some(marker) = numbered_re().find(trimmed) {
        return Block::Bullet(inline_spans(&trimmed[marker.end()..]));
    }

    // The untrimmed line: paragraphs keep their leading whitespace.
    Block::Paragraph(inline_spans(line))
}

/// Splits a line into alternating plain and emphasized spans on
/// `**...**` token pairs, in left-to-right order.
///
/// An unterminated `**` marker is not an emphasis boundary; it stays
/// in the surrounding plain text.
pub fn inline_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for caps in emphasis_re().captures_iter(text) {
        let token = caps.get(0).unwrap();
        if token.start() > cursor {
            spans.push(Span::Plain(text[cursor..token.start()].to_owned()));
        }
        spans.push(Span::Emphasis(caps[1].to_owned()));
        cursor = token.end();
    }
    if cursor < text.len() {
        spans.push(Span::Plain(text[cursor..].to_owned()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_emphasis_alternation() {
        assert_eq!(
            inline_spans("**a** b **c**"),
            [
                Span::Emphasis("a".to_owned()),
                Span::Plain(" b ".to_owned()),
                Span::Emphasis("c".to_owned()),
            ]
        );
    }

    #[test]
    fn test_adjacent_emphasis_spans_stay_separate() {
        assert_eq!(
            inline_spans("**a****b**"),
            [
                Span::Emphasis("a".to_owned()),
                Span::Emphasis("b".to_owned()),
            ]
        );
    }

    #[test]
    fn test_unterminated_marker_is_literal() {
        assert_eq!(
            inline_spans("un **mot"),
            [Span::Plain("un **mot".to_owned())]
        );
        assert_eq!(
            inline_spans("**a** et **b"),
            [
                Span::Emphasis("a".to_owned()),
                Span::Plain(" et **b".to_owned()),
            ]
        );
    }

    #[test]
    fn test_bold_line_is_a_heading() {
        let blocks = assistant_blocks("**Droit de la famille**");
        assert_eq!(blocks.len(), 1);
        let Block::Heading(_) = &blocks[0] else {
            panic!("expected a heading, got {:?}", blocks[0]);
        };
        assert_eq!(blocks[0].text(), "Droit de la famille");
    }

    #[test]
    fn test_hash_heading() {
        let blocks = assistant_blocks("## Succession");
        assert_eq!(blocks, [heading("Succession")]);
        // No space after the marker run.
        let blocks = assistant_blocks("##Succession");
        assert_eq!(blocks, [heading("Succession")]);
    }

    #[test]
    fn test_heading_strips_inner_bold_markers() {
        let blocks = assistant_blocks("## Le **PACS**");
        assert_eq!(blocks, [heading("Le PACS")]);
    }

    #[test]
    fn test_long_bold_line_stays_a_paragraph() {
        let line = format!("**{}**", "a".repeat(90));
        let blocks = assistant_blocks(&line);
        assert_eq!(
            blocks,
            [Block::Paragraph(vec![Span::Emphasis("a".repeat(90))])]
        );
    }

    #[test]
    fn test_bullet_items() {
        let blocks = assistant_blocks("* Mariage & PACS");
        assert_eq!(blocks, [bullet("Mariage & PACS")]);

        let blocks = assistant_blocks("- Donation");
        assert_eq!(blocks, [bullet("Donation")]);

        let blocks = assistant_blocks("1. Ouverture du dossier");
        assert_eq!(blocks, [bullet("Ouverture du dossier")]);

        let blocks = assistant_blocks("12. Signature");
        assert_eq!(blocks, [bullet("Signature")]);
    }

    #[test]
    fn test_bullet_keeps_inline_emphasis() {
        let blocks = assistant_blocks("* Le **testament** authentique");
        assert_eq!(
            blocks,
            [Block::Bullet(vec![
                Span::Plain("Le ".to_owned()),
                Span::Emphasis("testament".to_owned()),
                Span::Plain(" authentique".to_owned()),
            ])]
        );
    }

    #[test]
    fn test_blank_lines_become_spacers() {
        let blocks = assistant_blocks("A\n\nB");
        assert_eq!(blocks, [paragraph("A"), Block::Spacer, paragraph("B")]);
    }

    #[test]
    fn test_whitespace_only_line_is_a_spacer() {
        let blocks = assistant_blocks("A\n   \t\nB");
        assert_eq!(blocks, [paragraph("A"), Block::Spacer, paragraph("B")]);
    }

    #[test]
    fn test_paragraph_keeps_leading_whitespace() {
        let blocks = assistant_blocks("  suite de la phrase");
        assert_eq!(blocks, [paragraph("  suite de la phrase")]);
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let text = "## Étapes\n1. Dossier\n2. Signature\n\nVoilà.";
        let blocks = assistant_blocks(text);
        assert_eq!(
            blocks,
            [
                heading("Étapes"),
                bullet("Dossier"),
                bullet("Signature"),
                Block::Spacer,
                paragraph("Voilà."),
            ]
        );
    }

    #[test]
    fn test_derivation_is_pure() {
        let text = "**Bonjour.**\n\n* Le droit de la famille\nUn **mot**.";
        assert_eq!(assistant_blocks(text), assistant_blocks(text));
    }

    #[test]
    fn test_user_text_is_one_literal_paragraph() {
        let text = "**pas de gras**\n\n* pas de liste";
        let blocks = message_blocks(Author::User, text);
        assert_eq!(
            blocks,
            [Block::Paragraph(vec![Span::Plain(text.to_owned())])]
        );
    }

    #[test]
    fn test_assistant_dispatch_parses_blocks() {
        let blocks = message_blocks(Author::Assistant, "## Titre");
        assert_eq!(blocks, [heading("Titre")]);
    }

    fn heading(text: &str) -> Block {
        Block::Heading(vec![Span::Plain(text.to_owned())])
    }

    fn bullet(text: &str) -> Block {
        Block::Bullet(vec![Span::Plain(text.to_owned())])
    }

    fn paragraph(text: &str) -> Block {
        Block::Paragraph(vec![Span::Plain(text.to_owned())])
    }
}
