//! Content API module - query composition, wire types and the HTTP client

mod client;
mod query;
pub mod response;

pub use client::ApiClient;
pub use query::SearchQuery;
pub use response::{Document, SearchResponse};
