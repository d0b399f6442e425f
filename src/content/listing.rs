//! Listing builder - metadata headers for every file in a category

use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

use super::{ContentLocator, ContentSummary, FrontMatter};
use crate::error::ContentError;

/// Build the listing for a category: one metadata header per `.mdx` file,
/// tagged with its file-stem slug
///
/// Order is directory-enumeration order; callers that need a specific
/// order sort explicitly on the `date` field. A file whose header fails
/// to parse is skipped with a warning.
pub async fn build_listing(
    locator: &ContentLocator,
    category: &str,
) -> Result<Vec<ContentSummary>, ContentError> {
    let dir = locator.category_dir(category);
    if !dir.is_dir() {
        return Err(ContentError::NotFound(category.to_string()));
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(&dir)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_mdx_file(path) {
            continue;
        }

        let slug = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };

        let source = fs::read_to_string(path).await?;
        match FrontMatter::parse(&source) {
            Ok((front, _)) => entries.push(ContentSummary { slug, front }),
            Err(e) => {
                tracing::warn!("skipping {:?}: {}", path, e);
            }
        }
    }

    Ok(entries)
}

/// Sort a listing reverse-chronologically; undated entries sink to the end
pub fn sort_by_date_desc(entries: &mut [ContentSummary]) {
    entries.sort_by(|a, b| b.date().cmp(&a.date()));
}

/// Check if a file is an MDX content file
fn is_mdx_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "mdx")
        .unwrap_or(false)
}
