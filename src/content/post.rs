//! Post display models mapped from API documents

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::api::response::{Document, RawSection};

use super::richtext::{self, RichTextBlock};

/// A post as it appears in the listing
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    /// Document identifier, unique within a listing
    pub uid: Option<String>,

    /// Publication date, absent for unpublished previews
    pub first_publication_date: Option<DateTime<FixedOffset>>,

    /// Post title
    pub title: String,

    /// Post subtitle
    pub subtitle: String,

    /// Author display name
    pub author: String,
}

impl PostSummary {
    /// Map a listing document into a summary
    ///
    /// Missing fields come through as blanks rather than errors.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            uid: doc.uid.clone(),
            first_publication_date: doc
                .first_publication_date
                .as_deref()
                .and_then(parse_publication_date),
            title: doc.data.title.clone().unwrap_or_default(),
            subtitle: doc.data.subtitle.clone().unwrap_or_default(),
            author: doc.data.author.clone().unwrap_or_default(),
        }
    }

    /// URL slug for this post (uid, or derived from the title)
    pub fn slug(&self) -> String {
        slug_for(self.uid.as_deref(), &self.title)
    }
}

/// A content section: heading plus rich-text body
#[derive(Debug, Clone, Serialize)]
pub struct ContentSection {
    pub heading: String,
    pub body: Vec<RichTextBlock>,
}

impl ContentSection {
    fn from_raw(raw: &RawSection) -> Self {
        Self {
            heading: raw.heading.clone().unwrap_or_default(),
            body: raw.body.clone(),
        }
    }

    /// Words in the heading plus the plain-text body
    pub fn word_count(&self) -> usize {
        count_words(&self.heading) + count_words(&richtext::as_text(&self.body))
    }

    pub fn body_html(&self) -> String {
        richtext::as_html(&self.body)
    }
}

/// A full post document
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub uid: Option<String>,
    pub first_publication_date: Option<DateTime<FixedOffset>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner_url: String,
    pub content: Vec<ContentSection>,
}

impl Post {
    /// Map a full document into a post
    pub fn from_document(doc: &Document) -> Self {
        Self {
            uid: doc.uid.clone(),
            first_publication_date: doc
                .first_publication_date
                .as_deref()
                .and_then(parse_publication_date),
            title: doc.data.title.clone().unwrap_or_default(),
            subtitle: doc.data.subtitle.clone().unwrap_or_default(),
            author: doc.data.author.clone().unwrap_or_default(),
            banner_url: doc
                .data
                .banner
                .as_ref()
                .and_then(|b| b.url.clone())
                .unwrap_or_default(),
            content: doc.data.content.iter().map(ContentSection::from_raw).collect(),
        }
    }

    /// Total words across all content sections
    pub fn word_count(&self) -> usize {
        self.content.iter().map(|s| s.word_count()).sum()
    }

    /// Estimated reading time in minutes, rounded up
    ///
    /// A post with no content sections reads in zero minutes.
    pub fn reading_time(&self, words_per_minute: usize) -> usize {
        self.word_count().div_ceil(words_per_minute)
    }

    pub fn slug(&self) -> String {
        slug_for(self.uid.as_deref(), &self.title)
    }
}

/// Count whitespace-separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn slug_for(uid: Option<&str>, title: &str) -> String {
    match uid {
        Some(uid) if !uid.is_empty() => uid.to_string(),
        _ => {
            let from_title = slug::slugify(title);
            if from_title.is_empty() {
                "untitled".to_string()
            } else {
                from_title
            }
        }
    }
}

/// Parse the API's ISO 8601 publication timestamps
///
/// The API emits offsets without a colon ("+0000"), which RFC 3339 parsing
/// rejects, so try both.
pub fn parse_publication_date(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}
