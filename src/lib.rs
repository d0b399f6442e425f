//! mdxpress: content pipeline for an MDX blog
//!
//! Locates `.mdx` files by category and slug under a configured content
//! root, splits the fenced metadata header from the body, runs the body
//! through a fixed chain of transform stages, and hands structured
//! content items to the rendering boundary.

pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod sitemap;

pub use error::ContentError;

use anyhow::Result;
use std::path::Path;

use content::{ContentItem, ContentLocator, ContentSummary, MdxRenderer};

/// The main site handle: configuration plus the content pipeline
///
/// The content root is resolved once at construction and threaded through
/// every locator and listing call.
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content root directory
    pub content_dir: std::path::PathBuf,

    locator: ContentLocator,
    renderer: MdxRenderer,
}

impl Site {
    /// Create a new site from a base directory, loading `_config.yml`
    /// when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let locator = ContentLocator::new(content_dir.clone());
        let renderer = MdxRenderer::with_theme(&config.highlight.theme);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            locator,
            renderer,
        })
    }

    /// Resolve one content item: locate, split, transform, measure
    ///
    /// Without a slug this resolves the category-level singleton
    /// document. The item is built fresh on every call; nothing is
    /// cached across requests.
    pub async fn get_content(
        &self,
        category: &str,
        slug: Option<&str>,
    ) -> Result<ContentItem, ContentError> {
        self.check_category(category)?;

        let source = self.locator.read(category, slug).await?;
        let (front, body) = content::FrontMatter::parse(&source)?;

        let rendered = self.renderer.render(body);
        let word_count = helpers::word_count(body);
        let reading_time = helpers::reading_time(body, self.config.words_per_minute);

        Ok(ContentItem {
            slug: slug.unwrap_or(category).to_string(),
            front,
            body: body.to_string(),
            content: rendered,
            word_count,
            reading_time,
        })
    }

    /// Metadata headers for every content file in a category
    pub async fn get_listing(&self, category: &str) -> Result<Vec<ContentSummary>, ContentError> {
        self.check_category(category)?;
        content::build_listing(&self.locator, category).await
    }

    /// Sitemap XML over all configured categories
    pub async fn sitemap_xml(&self) -> Result<String, ContentError> {
        sitemap::generate(self).await
    }

    fn check_category(&self, category: &str) -> Result<(), ContentError> {
        if self.config.categories.iter().any(|c| c == category) {
            Ok(())
        } else {
            Err(ContentError::NotFound(category.to_string()))
        }
    }
}
