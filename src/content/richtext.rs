//! Structured rich text from the content API
//!
//! The API delivers body text as a flat list of typed blocks; inline
//! formatting is carried as spans with character offsets into the block
//! text. Blocks convert to HTML for rendering or to plain text for the
//! word count.

use serde::{Deserialize, Serialize};

use crate::helpers::escape_html;

/// One rich-text block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub spans: Vec<Span>,
    /// Image blocks carry their source URL here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    #[serde(rename = "paragraph")]
    Paragraph,
    #[serde(rename = "heading1")]
    Heading1,
    #[serde(rename = "heading2")]
    Heading2,
    #[serde(rename = "heading3")]
    Heading3,
    #[serde(rename = "heading4")]
    Heading4,
    #[serde(rename = "heading5")]
    Heading5,
    #[serde(rename = "heading6")]
    Heading6,
    #[serde(rename = "list-item")]
    ListItem,
    #[serde(rename = "o-list-item")]
    OrderedListItem,
    #[serde(rename = "preformatted")]
    Preformatted,
    #[serde(rename = "image")]
    Image,
    /// Block types we do not render specially fall back to a paragraph
    #[serde(other)]
    Other,
}

/// Inline formatting applied to a character range of a block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub kind: SpanKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SpanData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanKind {
    #[serde(rename = "strong")]
    Strong,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "hyperlink")]
    Hyperlink,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanData {
    pub url: Option<String>,
}

impl Span {
    fn open_tag(&self) -> Option<String> {
        match self.kind {
            SpanKind::Strong => Some("<strong>".to_string()),
            SpanKind::Em => Some("<em>".to_string()),
            SpanKind::Hyperlink => {
                let url = self
                    .data
                    .as_ref()
                    .and_then(|d| d.url.as_deref())
                    .unwrap_or("");
                Some(format!(r#"<a href="{}">"#, escape_html(url)))
            }
            SpanKind::Other => None,
        }
    }

    fn close_tag(&self) -> Option<&'static str> {
        match self.kind {
            SpanKind::Strong => Some("</strong>"),
            SpanKind::Em => Some("</em>"),
            SpanKind::Hyperlink => Some("</a>"),
            SpanKind::Other => None,
        }
    }
}

/// Render blocks as plain text (block texts joined with spaces)
pub fn as_text(blocks: &[RichTextBlock]) -> String {
    blocks
        .iter()
        .filter(|b| b.kind != BlockKind::Image)
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render blocks as HTML
///
/// Consecutive list items are grouped into a single `<ul>` or `<ol>`.
pub fn as_html(blocks: &[RichTextBlock]) -> String {
    let mut html = String::new();
    let mut i = 0;

    while i < blocks.len() {
        let block = &blocks[i];
        match block.kind {
            BlockKind::ListItem | BlockKind::OrderedListItem => {
                let kind = block.kind;
                let tag = if kind == BlockKind::ListItem { "ul" } else { "ol" };
                html.push_str(&format!("<{}>", tag));
                while i < blocks.len() && blocks[i].kind == kind {
                    html.push_str("<li>");
                    html.push_str(&apply_spans(&blocks[i].text, &blocks[i].spans));
                    html.push_str("</li>");
                    i += 1;
                }
                html.push_str(&format!("</{}>", tag));
                continue;
            }
            BlockKind::Image => {
                let src = block.url.as_deref().unwrap_or("");
                let alt = block.alt.as_deref().unwrap_or("");
                html.push_str(&format!(
                    r#"<p class="block-img"><img src="{}" alt="{}"></p>"#,
                    escape_html(src),
                    escape_html(alt)
                ));
            }
            BlockKind::Preformatted => {
                html.push_str("<pre>");
                html.push_str(&apply_spans(&block.text, &block.spans));
                html.push_str("</pre>");
            }
            _ => {
                let tag = match block.kind {
                    BlockKind::Heading1 => "h1",
                    BlockKind::Heading2 => "h2",
                    BlockKind::Heading3 => "h3",
                    BlockKind::Heading4 => "h4",
                    BlockKind::Heading5 => "h5",
                    BlockKind::Heading6 => "h6",
                    _ => "p",
                };
                html.push_str(&format!("<{}>", tag));
                html.push_str(&apply_spans(&block.text, &block.spans));
                html.push_str(&format!("</{}>", tag));
            }
        }
        i += 1;
    }

    html
}

/// Apply inline spans to block text, escaping as we go
///
/// Span offsets are measured in characters, not bytes.
fn apply_spans(text: &str, spans: &[Span]) -> String {
    if spans.is_empty() {
        return escape_html(text);
    }

    // Outer spans open first at a shared boundary
    let mut ordered: Vec<&Span> = spans.iter().collect();
    ordered.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();

    for i in 0..=chars.len() {
        for span in ordered.iter().rev() {
            if span.end == i {
                if let Some(tag) = span.close_tag() {
                    out.push_str(tag);
                }
            }
        }
        for span in &ordered {
            if span.start == i {
                if let Some(tag) = span.open_tag() {
                    out.push_str(&tag);
                }
            }
        }
        if i < chars.len() {
            match chars[i] {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                c => out.push(c),
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(text: &str, spans: Vec<Span>) -> RichTextBlock {
        RichTextBlock {
            kind: BlockKind::Paragraph,
            text: text.to_string(),
            spans,
            url: None,
            alt: None,
        }
    }

    fn block(kind: BlockKind, text: &str) -> RichTextBlock {
        RichTextBlock {
            kind,
            text: text.to_string(),
            spans: Vec::new(),
            url: None,
            alt: None,
        }
    }

    #[test]
    fn test_as_text_joins_blocks() {
        let blocks = vec![block(BlockKind::Heading2, "First"), paragraph("one two", vec![])];
        assert_eq!(as_text(&blocks), "First one two");
    }

    #[test]
    fn test_as_text_skips_images() {
        let mut image = block(BlockKind::Image, "");
        image.url = Some("https://images.example.io/x.png".to_string());
        let blocks = vec![paragraph("before", vec![]), image, paragraph("after", vec![])];
        assert_eq!(as_text(&blocks), "before after");
    }

    #[test]
    fn test_paragraph_and_heading_html() {
        let blocks = vec![block(BlockKind::Heading2, "Title"), paragraph("body", vec![])];
        assert_eq!(as_html(&blocks), "<h2>Title</h2><p>body</p>");
    }

    #[test]
    fn test_text_is_escaped() {
        let blocks = vec![paragraph("a < b & c", vec![])];
        assert_eq!(as_html(&blocks), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_strong_span() {
        let blocks = vec![paragraph(
            "one two three",
            vec![Span {
                start: 4,
                end: 7,
                kind: SpanKind::Strong,
                data: None,
            }],
        )];
        assert_eq!(as_html(&blocks), "<p>one <strong>two</strong> three</p>");
    }

    #[test]
    fn test_hyperlink_span() {
        let blocks = vec![paragraph(
            "see docs",
            vec![Span {
                start: 4,
                end: 8,
                kind: SpanKind::Hyperlink,
                data: Some(SpanData {
                    url: Some("https://example.com".to_string()),
                }),
            }],
        )];
        assert_eq!(
            as_html(&blocks),
            r#"<p>see <a href="https://example.com">docs</a></p>"#
        );
    }

    #[test]
    fn test_nested_spans_close_inner_first() {
        let blocks = vec![paragraph(
            "bold and em",
            vec![
                Span {
                    start: 0,
                    end: 11,
                    kind: SpanKind::Strong,
                    data: None,
                },
                Span {
                    start: 9,
                    end: 11,
                    kind: SpanKind::Em,
                    data: None,
                },
            ],
        )];
        assert_eq!(
            as_html(&blocks),
            "<p><strong>bold and <em>em</em></strong></p>"
        );
    }

    #[test]
    fn test_span_offsets_are_characters() {
        // "café" has 4 characters; the span covers the last word
        let blocks = vec![paragraph(
            "café bom",
            vec![Span {
                start: 5,
                end: 8,
                kind: SpanKind::Em,
                data: None,
            }],
        )];
        assert_eq!(as_html(&blocks), "<p>café <em>bom</em></p>");
    }

    #[test]
    fn test_list_grouping() {
        let blocks = vec![
            paragraph("intro", vec![]),
            block(BlockKind::ListItem, "one"),
            block(BlockKind::ListItem, "two"),
            block(BlockKind::OrderedListItem, "first"),
        ];
        assert_eq!(
            as_html(&blocks),
            "<p>intro</p><ul><li>one</li><li>two</li></ul><ol><li>first</li></ol>"
        );
    }

    #[test]
    fn test_unknown_block_renders_as_paragraph() {
        let parsed: RichTextBlock =
            serde_json::from_str(r#"{"type": "embed", "text": "x", "spans": []}"#).unwrap();
        assert_eq!(parsed.kind, BlockKind::Other);
        assert_eq!(as_html(&[parsed]), "<p>x</p>");
    }

    #[test]
    fn test_image_block_html() {
        let mut image = block(BlockKind::Image, "");
        image.url = Some("https://images.example.io/x.png".to_string());
        image.alt = Some("a satellite".to_string());
        assert_eq!(
            as_html(&[image]),
            r#"<p class="block-img"><img src="https://images.example.io/x.png" alt="a satellite"></p>"#
        );
    }
}
