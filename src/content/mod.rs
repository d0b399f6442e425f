//! Content module - locating, parsing, and transforming content files

mod frontmatter;
mod item;
mod listing;
mod locator;
mod pipeline;
pub mod stages;

pub use frontmatter::{split_document, FrontMatter};
pub use item::{ContentItem, ContentSummary};
pub use listing::{build_listing, sort_by_date_desc};
pub use locator::ContentLocator;
pub use pipeline::{MdxRenderer, RenderedBody, TransformStage};
