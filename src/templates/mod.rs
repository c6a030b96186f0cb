//! Built-in orbit theme templates using the Tera template engine
//!
//! The theme is embedded directly in the binary; the generator and the
//! preview server both render through it.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded orbit theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all orbit templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Context values are escaped when the data is built, and rich-text
        // bodies arrive pre-rendered, so Tera's autoescaping stays off.
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("orbit/layout.html")),
            ("index.html", include_str!("orbit/index.html")),
            ("post.html", include_str!("orbit/post.html")),
            ("not_found.html", include_str!("orbit/not_found.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Site fields available to every template
#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub url: String,
    pub root: String,
    pub language: String,
}

/// One listing entry
#[derive(Debug, Clone, Serialize)]
pub struct ListingItemData {
    pub path: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date: String,
}

/// Pager state for a listing page
#[derive(Debug, Clone, Serialize)]
pub struct PaginationData {
    pub current: usize,
    pub total: usize,
    pub prev_link: String,
    pub next_link: String,
}

/// A rendered content section
#[derive(Debug, Clone, Serialize)]
pub struct SectionData {
    pub heading: String,
    pub body_html: String,
}

/// A fully rendered post page
#[derive(Debug, Clone, Serialize)]
pub struct PostPageData {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date: String,
    pub banner_url: String,
    pub reading_time: usize,
    pub description: String,
    pub sections: Vec<SectionData>,
}
