//! Content locator - resolves a category and optional slug to one
//! readable source
//!
//! The content root is passed in explicitly at construction and threaded
//! through every call; there is no process-wide working-directory state.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::ContentError;

/// Resolves content files under a configured content root
#[derive(Debug, Clone)]
pub struct ContentLocator {
    content_dir: PathBuf,
}

impl ContentLocator {
    /// Create a locator rooted at `content_dir`
    pub fn new<P: Into<PathBuf>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Directory holding one file per slug for the given category
    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.content_dir.join(category)
    }

    /// Resolve the path backing a category and optional slug
    ///
    /// With a slug this is `<root>/<category>/<slug>.mdx`; without one it
    /// is the category-level singleton `<root>/<category>.mdx`.
    pub fn resolve(&self, category: &str, slug: Option<&str>) -> PathBuf {
        match slug {
            Some(slug) => self
                .content_dir
                .join(category)
                .join(format!("{}.mdx", slug)),
            None => self.content_dir.join(format!("{}.mdx", category)),
        }
    }

    /// Read the raw text of the resolved source
    ///
    /// A missing or unreadable path is a `NotFound`; the rendering
    /// boundary turns that into a not-found response.
    pub async fn read(&self, category: &str, slug: Option<&str>) -> Result<String, ContentError> {
        let path = self.resolve(category, slug);
        tracing::debug!("reading content from {:?}", path);

        match fs::read_to_string(&path).await {
            Ok(source) => Ok(source),
            Err(e) if is_unreadable(e.kind()) => {
                tracing::debug!("treating read failure as not found: {}", e);
                Err(ContentError::NotFound(content_key(category, slug)))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Read failures that mean the lookup has no usable backing file, as
/// opposed to transient or environmental io errors
fn is_unreadable(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::NotFound | ErrorKind::PermissionDenied | ErrorKind::InvalidData
    )
}

/// Human-readable `category/slug` key for error messages
pub(crate) fn content_key(category: &str, slug: Option<&str>) -> String {
    match slug {
        Some(slug) => format!("{}/{}", category, slug),
        None => category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn locator_with_content() -> (tempfile::TempDir, ContentLocator) {
        let tmp = tempfile::tempdir().unwrap();
        let blog = tmp.path().join("blog");
        std_fs::create_dir_all(&blog).unwrap();
        std_fs::write(blog.join("hello.mdx"), "---\ntitle: Hello\n---\nhi").unwrap();
        std_fs::write(tmp.path().join("about.mdx"), "about the site").unwrap();
        let locator = ContentLocator::new(tmp.path());
        (tmp, locator)
    }

    #[test]
    fn test_resolve_paths() {
        let locator = ContentLocator::new("/content");
        assert_eq!(
            locator.resolve("blog", Some("hello")),
            PathBuf::from("/content/blog/hello.mdx")
        );
        assert_eq!(
            locator.resolve("about", None),
            PathBuf::from("/content/about.mdx")
        );
    }

    #[tokio::test]
    async fn test_read_existing_slug() {
        let (_tmp, locator) = locator_with_content();
        let source = locator.read("blog", Some("hello")).await.unwrap();
        assert!(source.contains("title: Hello"));
    }

    #[tokio::test]
    async fn test_read_singleton() {
        let (_tmp, locator) = locator_with_content();
        let source = locator.read("about", None).await.unwrap();
        assert_eq!(source, "about the site");
    }

    #[test]
    fn test_unreadable_kinds_map_to_not_found() {
        assert!(is_unreadable(ErrorKind::NotFound));
        assert!(is_unreadable(ErrorKind::PermissionDenied));
        assert!(is_unreadable(ErrorKind::InvalidData));
        // Environmental failures keep their io identity
        assert!(!is_unreadable(ErrorKind::BrokenPipe));
        assert!(!is_unreadable(ErrorKind::TimedOut));
    }

    #[tokio::test]
    async fn test_missing_slug_is_not_found() {
        let (_tmp, locator) = locator_with_content();
        let err = locator.read("blog", Some("missing")).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("blog/missing"));
    }
}
