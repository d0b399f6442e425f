//! Content item models

use chrono::NaiveDate;
use serde::Serialize;

use super::{FrontMatter, RenderedBody};

/// One fully resolved piece of content (article or snippet)
///
/// Constructed fresh per request, immutable after construction. The
/// serialized shape is what the rendering boundary consumes: metadata
/// fields, rendered content, reading time, and word count.
#[derive(Debug, Clone, Serialize)]
pub struct ContentItem {
    /// Identifier derived from the file name, unique within its category
    pub slug: String,

    /// Author-declared metadata header
    #[serde(flatten)]
    pub front: FrontMatter,

    /// Raw text following the header; kept for measurements, not for
    /// the rendering boundary
    #[serde(skip)]
    pub body: String,

    /// Transformed body, consumed opaquely by the rendering boundary
    pub content: RenderedBody,

    #[serde(rename = "wordCount")]
    pub word_count: usize,

    #[serde(rename = "readingTime")]
    pub reading_time: String,
}

impl ContentItem {
    /// Title for display, falling back to the slug when the header
    /// omits one
    pub fn title(&self) -> &str {
        self.front.title.as_deref().unwrap_or(&self.slug)
    }
}

/// One entry of a category listing: a metadata header tagged with the
/// slug of its source file
#[derive(Debug, Clone, Serialize)]
pub struct ContentSummary {
    pub slug: String,

    #[serde(flatten)]
    pub front: FrontMatter,
}

impl ContentSummary {
    pub fn title(&self) -> &str {
        self.front.title.as_deref().unwrap_or(&self.slug)
    }

    /// Publication date, when the header declares a parseable one
    pub fn date(&self) -> Option<NaiveDate> {
        self.front.parse_date()
    }
}
