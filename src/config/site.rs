//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Content API
    pub api: ApiConfig,

    // Directory
    pub public_dir: String,
    pub post_dir: String,

    // Date format (DD, MM, MMM, YYYY tokens)
    pub date_format: String,

    // Reading speed used for the reading-time estimate
    pub words_per_minute: usize,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Orbit".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: String::new(),
            language: "pt-BR".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            api: ApiConfig::default(),

            public_dir: "public".to_string(),
            post_dir: "post".to_string(),

            date_format: "DD MMM YYYY".to_string(),

            words_per_minute: 200,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Content API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the content API, e.g. https://myblog.cdn.example.io/api/v2
    pub url: String,

    /// Document type queried for the listing
    pub document_type: String,

    /// Fields projected into listing results
    pub fetch: Vec<String>,

    /// Page size for listing queries
    pub page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            document_type: "post".to_string(),
            fetch: vec![
                "post.title".to_string(),
                "post.subtitle".to_string(),
                "post.author".to_string(),
            ],
            page_size: 1,
        }
    }
}
