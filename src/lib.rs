//! orbit-rs: a static blog generator over a headless content API
//!
//! Posts live in a hosted content service rather than on disk; this crate
//! fetches them through the service's paginated search API and renders a
//! listing page plus one page per post with an embedded Tera theme.

pub mod api;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

use crate::api::ApiClient;

/// The main Orbit application
#[derive(Clone)]
pub struct Orbit {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Orbit {
    /// Create a new Orbit instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
        })
    }

    /// Build a client for the configured content API
    pub fn client(&self) -> Result<ApiClient> {
        Ok(ApiClient::from_config(&self.config.api)?)
    }

    /// Generate the static site
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
