//! Sitemap builder - canonical URLs for every resolvable slug
//!
//! Consumes the listing builder's output only: the root page, each
//! category landing page, and one URL per content file.

use crate::error::ContentError;
use crate::helpers::{encode_path, full_url_for};
use crate::Site;

/// Generate sitemap XML covering all configured categories
pub async fn generate(site: &Site) -> Result<String, ContentError> {
    let mut paths: Vec<String> = vec![String::new()];
    for category in &site.config.categories {
        paths.push(category.clone());
    }

    for category in &site.config.categories {
        let listing = site.get_listing(category).await?;
        for entry in listing {
            paths.push(format!("{}/{}", category, entry.slug));
        }
    }

    tracing::debug!("sitemap covers {} urls", paths.len());
    Ok(render_urlset(site, &paths))
}

fn render_urlset(site: &Site, paths: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for path in paths {
        let loc = full_url_for(&site.config, &encode_path(path));
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_with_content() -> (tempfile::TempDir, Site) {
        let tmp = tempfile::tempdir().unwrap();
        let blog = tmp.path().join("data").join("blog");
        let snippets = tmp.path().join("data").join("snippets");
        fs::create_dir_all(&blog).unwrap();
        fs::create_dir_all(&snippets).unwrap();
        fs::write(blog.join("hello.mdx"), "---\ntitle: Hello\n---\nhi").unwrap();
        fs::write(snippets.join("tip.mdx"), "---\ntitle: Tip\n---\nuse it").unwrap();
        let site = Site::new(tmp.path()).unwrap();
        (tmp, site)
    }

    #[tokio::test]
    async fn test_sitemap_lists_all_slugs() {
        let (_tmp, site) = site_with_content();
        let xml = generate(&site).await.unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog</loc>"));
        assert!(xml.contains("<loc>https://example.com/snippets</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog/hello</loc>"));
        assert!(xml.contains("<loc>https://example.com/snippets/tip</loc>"));
    }

    #[tokio::test]
    async fn test_missing_category_dir_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        // Only one of the two default categories has a directory
        fs::create_dir_all(tmp.path().join("data").join("blog")).unwrap();
        let site = Site::new(tmp.path()).unwrap();

        let err = generate(&site).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
    }
}
