//! Generator module - renders listing and post pages with the embedded theme

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use tera::Context;

use crate::api::ApiClient;
use crate::content::{Feed, Post, PostSummary};
use crate::helpers::{escape_html, format_optional_date, post_path, strip_html, url_for};
use crate::templates::{
    ConfigData, ListingItemData, PaginationData, PostPageData, SectionData, TemplateRenderer,
};
use crate::Orbit;

/// Static site generator
pub struct Generator {
    orbit: Orbit,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(orbit: &Orbit) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            orbit: orbit.clone(),
            renderer,
        })
    }

    /// Fetch every post from the content API and generate the site
    pub async fn generate(&self, client: &ApiClient) -> Result<()> {
        fs::create_dir_all(&self.orbit.public_dir)?;

        // Walk the listing to the end of the continuation chain
        let mut feed = Feed::fetch(client, &self.orbit.config.api).await?;
        feed.load_all(client).await?;
        tracing::info!("Loaded {} posts from the content API", feed.posts().len());

        self.generate_index_pages(feed.posts())?;

        let mut generated = 0;
        for summary in feed.posts() {
            let Some(uid) = summary.uid.as_deref() else {
                tracing::warn!("Skipping post without uid: {:?}", summary.title);
                continue;
            };

            let doc = client
                .get_by_uid(&self.orbit.config.api.document_type, uid)
                .await?;
            let post = Post::from_document(&doc);
            self.write_post_page(&post)?;
            generated += 1;
        }

        tracing::info!("Generated {} post pages", generated);
        Ok(())
    }

    /// Generate listing pages, one per API page of results
    pub fn generate_index_pages(&self, posts: &[PostSummary]) -> Result<()> {
        let config = &self.orbit.config;
        let per_page = config.api.page_size.max(1);
        let total_pages = posts.len().div_ceil(per_page).max(1);

        for page_num in 1..=total_pages {
            let start = (page_num - 1) * per_page;
            let end = (start + per_page).min(posts.len());
            let page_posts: Vec<ListingItemData> = posts[start..end]
                .iter()
                .map(|p| self.build_listing_item(p))
                .collect();

            let pagination = PaginationData {
                current: page_num,
                total: total_pages,
                prev_link: if page_num == 2 {
                    url_for(config, "")
                } else if page_num > 2 {
                    url_for(config, &format!("page/{}/", page_num - 1))
                } else {
                    String::new()
                },
                next_link: if page_num < total_pages {
                    url_for(config, &format!("page/{}/", page_num + 1))
                } else {
                    String::new()
                },
            };

            let mut context = self.base_context();
            context.insert("posts", &page_posts);
            context.insert("pagination", &pagination);

            let html = self.renderer.render("index.html", &context)?;

            let output_path = if page_num == 1 {
                self.orbit.public_dir.join("index.html")
            } else {
                self.orbit
                    .public_dir
                    .join(format!("page/{}/index.html", page_num))
            };

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)?;
            tracing::debug!("Generated: {:?}", output_path);
        }

        Ok(())
    }

    /// Render a post page to HTML
    pub fn render_post_page(&self, post: &Post) -> Result<String> {
        let mut context = self.base_context();
        context.insert("post", &self.build_post_page(post));
        self.renderer.render("post.html", &context)
    }

    /// Render and persist a post page, returning the written path and HTML
    pub fn write_post_page(&self, post: &Post) -> Result<(PathBuf, String)> {
        let html = self.render_post_page(post)?;

        let output_path = self
            .orbit
            .public_dir
            .join(&self.orbit.config.post_dir)
            .join(post.slug())
            .join("index.html");

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, &html)?;
        tracing::debug!("Generated post: {:?}", output_path);

        Ok((output_path, html))
    }

    /// Render the not-found page
    pub fn render_not_found(&self) -> Result<String> {
        let context = self.base_context();
        self.renderer.render("not_found.html", &context)
    }

    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.build_config_data());
        context
    }

    fn build_config_data(&self) -> ConfigData {
        let config = &self.orbit.config;
        ConfigData {
            title: escape_html(&config.title),
            subtitle: escape_html(&config.subtitle),
            description: escape_html(&config.description),
            author: escape_html(&config.author),
            url: config.url.clone(),
            root: url_for(config, ""),
            language: config.language.clone(),
        }
    }

    fn build_listing_item(&self, post: &PostSummary) -> ListingItemData {
        let config = &self.orbit.config;
        ListingItemData {
            path: post_path(config, &post.slug()),
            title: escape_html(&post.title),
            subtitle: escape_html(&post.subtitle),
            author: escape_html(&post.author),
            date: format_optional_date(
                post.first_publication_date.as_ref(),
                &config.date_format,
                &config.language,
            ),
        }
    }

    fn build_post_page(&self, post: &Post) -> PostPageData {
        let config = &self.orbit.config;

        let sections: Vec<SectionData> = post
            .content
            .iter()
            .map(|s| SectionData {
                heading: escape_html(&s.heading),
                body_html: s.body_html(),
            })
            .collect();

        // First section's text doubles as the meta description
        let description = sections
            .first()
            .map(|s| {
                let text = strip_html(&s.body_html);
                let text = text.trim();
                if text.chars().count() > 160 {
                    let truncated: String = text.chars().take(157).collect();
                    format!("{}...", truncated)
                } else {
                    text.to_string()
                }
            })
            .unwrap_or_default();

        PostPageData {
            title: escape_html(&post.title),
            subtitle: escape_html(&post.subtitle),
            author: escape_html(&post.author),
            date: format_optional_date(
                post.first_publication_date.as_ref(),
                &config.date_format,
                &config.language,
            ),
            banner_url: escape_html(&post.banner_url),
            reading_time: post.reading_time(config.words_per_minute),
            description,
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::richtext::{BlockKind, RichTextBlock};
    use crate::content::ContentSection;

    fn orbit_in(dir: &std::path::Path) -> Orbit {
        Orbit::new(dir).unwrap()
    }

    fn summary(uid: &str, title: &str) -> PostSummary {
        PostSummary {
            uid: Some(uid.to_string()),
            first_publication_date: crate::content::parse_publication_date(
                "2021-03-15T19:25:28+0000",
            ),
            title: title.to_string(),
            subtitle: "sub".to_string(),
            author: "Ada Sousa".to_string(),
        }
    }

    fn sample_post() -> Post {
        Post {
            uid: Some("how-to-orbit".to_string()),
            first_publication_date: crate::content::parse_publication_date(
                "2021-03-15T19:25:28+0000",
            ),
            title: "How to orbit".to_string(),
            subtitle: "Staying in free fall".to_string(),
            author: "Ada Sousa".to_string(),
            banner_url: "https://images.example.io/banner.png".to_string(),
            content: vec![ContentSection {
                heading: "Falling forever".to_string(),
                body: vec![RichTextBlock {
                    kind: BlockKind::Paragraph,
                    text: "Throw it hard enough.".to_string(),
                    spans: Vec::new(),
                    url: None,
                    alt: None,
                }],
            }],
        }
    }

    #[test]
    fn test_generate_index_pages_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let orbit = orbit_in(dir.path());
        let generator = Generator::new(&orbit).unwrap();

        let posts = vec![summary("first", "First"), summary("second", "Second")];
        generator.generate_index_pages(&posts).unwrap();

        // page_size defaults to 1, so two listing pages
        let index = std::fs::read_to_string(orbit.public_dir.join("index.html")).unwrap();
        assert!(index.contains("First"));
        assert!(index.contains("Load more posts"));
        assert!(index.contains("15 mar 2021"));

        let page2 =
            std::fs::read_to_string(orbit.public_dir.join("page/2/index.html")).unwrap();
        assert!(page2.contains("Second"));
        assert!(!page2.contains("Load more posts"));
    }

    #[test]
    fn test_generate_index_pages_empty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let orbit = orbit_in(dir.path());
        let generator = Generator::new(&orbit).unwrap();

        generator.generate_index_pages(&[]).unwrap();

        assert!(orbit.public_dir.join("index.html").exists());
    }

    #[test]
    fn test_write_post_page() {
        let dir = tempfile::tempdir().unwrap();
        let orbit = orbit_in(dir.path());
        let generator = Generator::new(&orbit).unwrap();

        let (path, _) = generator.write_post_page(&sample_post()).unwrap();

        assert_eq!(
            path,
            orbit.public_dir.join("post/how-to-orbit/index.html")
        );
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("<h1>How to orbit</h1>"));
        assert!(html.contains("1 min"));
        assert!(html.contains("<p>Throw it hard enough.</p>"));
        // meta description comes from the first section
        assert!(html.contains(r#"content="Throw it hard enough.""#));
    }

    #[test]
    fn test_escapes_titles_in_listing() {
        let dir = tempfile::tempdir().unwrap();
        let orbit = orbit_in(dir.path());
        let generator = Generator::new(&orbit).unwrap();

        let mut post = summary("x", "Tags <& more>");
        post.subtitle = String::new();
        generator.generate_index_pages(&[post]).unwrap();

        let index = std::fs::read_to_string(orbit.public_dir.join("index.html")).unwrap();
        assert!(index.contains("Tags &lt;&amp; more&gt;"));
    }
}
