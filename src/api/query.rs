//! Search query composition for the content API

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside query-string values
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'%');

/// Content API search query
#[derive(Debug, Clone)]
pub struct SearchQuery(Vec<(String, String)>);

impl SearchQuery {
    pub fn new() -> Self {
        SearchQuery(Vec::new())
    }

    /// Request parameters for a paginated listing of one document type
    pub fn documents(document_type: &str, fetch: &[String], page_size: usize) -> Self {
        let mut query = SearchQuery::new();
        query.insert("q", format!(r#"[[at(document.type, "{}")]]"#, document_type));
        if !fetch.is_empty() {
            query.insert("fetch", fetch.join(","));
        }
        query.insert("pageSize", page_size);
        query
    }

    /// Request parameters for a single document looked up by uid
    pub fn by_uid(document_type: &str, uid: &str) -> Self {
        let mut query = SearchQuery::new();
        query.insert(
            "q",
            format!(r#"[[at(my.{}.uid, "{}")]]"#, document_type, uid),
        );
        query.insert("pageSize", 1);
        query
    }

    pub fn insert<K: ToString, V: ToString>(&mut self, key: K, value: V) {
        self.0.push((key.to_string(), value.to_string()));
    }

    /// Render as a query string with escaped values
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_VALUE)))
            .collect::<Vec<String>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_query() {
        let fetch = vec!["post.title".to_string(), "post.author".to_string()];
        let query = SearchQuery::documents("post", &fetch, 1);
        assert_eq!(
            query.to_query_string(),
            "q=[[at(document.type,%20%22post%22)]]&fetch=post.title,post.author&pageSize=1"
        );
    }

    #[test]
    fn test_documents_query_without_projection() {
        let query = SearchQuery::documents("post", &[], 20);
        assert_eq!(
            query.to_query_string(),
            "q=[[at(document.type,%20%22post%22)]]&pageSize=20"
        );
    }

    #[test]
    fn test_by_uid_query() {
        let query = SearchQuery::by_uid("post", "my-first-post");
        assert_eq!(
            query.to_query_string(),
            "q=[[at(my.post.uid,%20%22my-first-post%22)]]&pageSize=1"
        );
    }

    #[test]
    fn test_insert_appends() {
        let mut query = SearchQuery::new();
        query.insert("pageSize", 3);
        query.insert("page", 2);
        assert_eq!(query.to_query_string(), "pageSize=3&page=2");
    }
}
