//! Paginated post listing backed by the API's continuation token

use crate::api::{ApiClient, SearchQuery, SearchResponse};
use crate::config::ApiConfig;
use crate::error::ApiError;

use super::post::PostSummary;

/// In-memory listing state: fetched summaries plus the continuation token
///
/// Posts keep the order the API returned them in; loading more pages only
/// ever appends. Nothing is deduplicated.
#[derive(Debug, Clone)]
pub struct Feed {
    posts: Vec<PostSummary>,
    next_page: Option<String>,
}

impl Feed {
    pub fn empty() -> Self {
        Self {
            posts: Vec::new(),
            next_page: None,
        }
    }

    /// Build a feed from one search response page
    pub fn from_response(response: &SearchResponse) -> Self {
        let mut feed = Feed::empty();
        feed.append(response);
        feed
    }

    /// Fetch the first listing page
    pub async fn fetch(client: &ApiClient, config: &ApiConfig) -> Result<Self, ApiError> {
        let query =
            SearchQuery::documents(&config.document_type, &config.fetch, config.page_size);
        let response = client.search(&query).await?;
        Ok(Feed::from_response(&response))
    }

    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Append one response page and advance the continuation token
    pub fn append(&mut self, response: &SearchResponse) {
        self.next_page = response.next_page.clone();
        self.posts
            .extend(response.results.iter().map(PostSummary::from_document));
    }

    /// Fetch the next page and append it
    ///
    /// Without a continuation token this is a no-op; the listing stays
    /// untouched and `Ok(false)` is returned.
    pub async fn load_more(&mut self, client: &ApiClient) -> Result<bool, ApiError> {
        let Some(url) = self.next_page.clone() else {
            return Ok(false);
        };

        let response = client.fetch_page(&url).await?;
        self.append(&response);
        Ok(true)
    }

    /// Keep loading pages until the listing is exhausted
    pub async fn load_all(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        while self.load_more(client).await? {}
        Ok(())
    }
}
