//! Wire types returned by the content API

use serde::Deserialize;

use crate::content::richtext::RichTextBlock;

/// One page of search results
///
/// `next_page` is an opaque continuation URL; `None` means the listing is
/// exhausted.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub page: u32,
    pub results_per_page: u32,
    pub results_size: u32,
    pub total_results_size: u32,
    pub total_pages: u32,
    pub next_page: Option<String>,
    pub prev_page: Option<String>,
    pub results: Vec<Document>,
}

/// A document as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub id: String,
    pub uid: Option<String>,
    #[serde(rename = "type")]
    pub document_type: String,
    /// ISO 8601 timestamp, null for unpublished previews
    pub first_publication_date: Option<String>,
    pub last_publication_date: Option<String>,
    pub data: DocumentData,
}

/// The `data` payload of a post document
///
/// Listing queries project only title/subtitle/author; the full document
/// carries the banner and content sections as well. Every field is optional
/// on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocumentData {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub banner: Option<Banner>,
    pub content: Vec<RawSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Banner {
    pub url: Option<String>,
}

/// A content section: a heading plus a rich-text body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSection {
    pub heading: Option<String>,
    pub body: Vec<RichTextBlock>,
}
