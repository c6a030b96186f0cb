//! Content API client

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;

use super::query::SearchQuery;
use super::response::{Document, SearchResponse};

/// HTTP client for the content API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for an API base URL
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("orbit-rs"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        ApiClient::new(&config.url)
    }

    /// Compose the document-search URL for a query
    fn search_url(&self, query: &SearchQuery) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}/documents/search", self.base_url))?;
        url.set_query(Some(&query.to_query_string()));
        Ok(url)
    }

    /// Run a search query and parse one page of results
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        let url = self.search_url(query)?;
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Fetch a continuation URL exactly as handed out by a previous page
    pub async fn fetch_page(&self, url: &str) -> Result<SearchResponse, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Fetch the full document for one identifier
    pub async fn get_by_uid(
        &self,
        document_type: &str,
        uid: &str,
    ) -> Result<Document, ApiError> {
        let query = SearchQuery::by_uid(document_type, uid);
        let mut page = self.search(&query).await?;
        if page.results.is_empty() {
            return Err(ApiError::DocumentNotFound(uid.to_string()));
        }
        Ok(page.results.remove(0))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_composition() {
        let client = ApiClient::new("https://blog.cdn.example.io/api/v2/").unwrap();
        let query = SearchQuery::documents("post", &[], 1);
        let url = client.search_url(&query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://blog.cdn.example.io/api/v2/documents/search?q=[[at(document.type,%20%22post%22)]]&pageSize=1"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("https://blog.cdn.example.io/api/v2///").unwrap();
        assert_eq!(client.base_url, "https://blog.cdn.example.io/api/v2");
    }
}
