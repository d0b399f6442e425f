//! MDX transform chain
//!
//! The body is parsed once with the GFM and math syntax extensions
//! enabled, then the event stream flows through a fixed, ordered chain of
//! pure stages. Stage order matters and mirrors the rendering contract:
//!
//! 1. table/autolink syntax extensions (parser options)
//! 2. math notation extensions (parser options)
//! 3. heading-id injection
//! 4. code-block title extraction
//! 5. syntax-highlighting annotation
//! 6. math notation rendering
//! 7. anchor-link injection on headings
//!
//! Rendering never fails: arbitrary input parses as markdown, and code
//! that cannot be highlighted falls back to escaped plain text.

use pulldown_cmark::{html, Event, Options, Parser};
use serde::{Deserialize, Serialize};

use super::stages::{AnchorLinks, CodeTitles, HeadingIds, MathSpans, SyntaxHighlight};

/// One stage of the transform chain: a pure transform over the parsed
/// event stream
pub trait TransformStage: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>>;
}

/// Transformed body, consumed opaquely by the rendering boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedBody {
    pub html: String,
}

/// Renders MDX body text through the fixed stage chain
pub struct MdxRenderer {
    stages: Vec<Box<dyn TransformStage>>,
}

impl MdxRenderer {
    /// Create a renderer with the default highlight theme
    pub fn new() -> Self {
        Self::with_theme("base16-ocean.dark")
    }

    /// Create a renderer highlighting code with the given syntect theme
    pub fn with_theme(theme: &str) -> Self {
        let stages: Vec<Box<dyn TransformStage>> = vec![
            Box::new(HeadingIds),
            Box::new(CodeTitles),
            Box::new(SyntaxHighlight::with_theme(theme)),
            Box::new(MathSpans),
            Box::new(AnchorLinks),
        ];
        Self { stages }
    }

    /// Transform body text into render-ready structured content
    pub fn render(&self, body: &str) -> RenderedBody {
        // Syntax extensions are the first two chain positions: GFM covers
        // tables/autolinks/strikethrough, MATH covers math notation.
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM
            | Options::ENABLE_MATH;

        let mut events: Vec<Event> = Parser::new_ext(body, options).collect();

        for stage in &self.stages {
            tracing::trace!(stage = stage.name(), "applying transform stage");
            events = stage.apply(events);
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        RenderedBody { html: html_output }
    }
}

impl Default for MdxRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MdxRenderer::new();
        let out = renderer.render("# Hello World\n\nThis is a test.");
        assert!(out.html.contains("Hello World"));
        assert!(out.html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_table() {
        let renderer = MdxRenderer::new();
        let out = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(out.html.contains("<table>"));
        assert!(out.html.contains("<td>1</td>"));
    }

    #[test]
    fn test_render_autolink() {
        let renderer = MdxRenderer::new();
        let out = renderer.render("see <https://example.com> for details");
        assert!(out.html.contains(r#"<a href="https://example.com""#));
    }

    #[test]
    fn test_heading_gets_id_and_anchor() {
        let renderer = MdxRenderer::new();
        let out = renderer.render("## My Section Title");
        assert!(out.html.contains(r#"id="my-section-title""#));
        assert!(out
            .html
            .contains(r##"<a class="anchor" href="#my-section-title""##));
    }

    #[test]
    fn test_code_block_title_and_highlight() {
        let renderer = MdxRenderer::new();
        let out = renderer.render("```rust:main.rs\nfn main() {}\n```");
        assert!(out.html.contains(r#"<div class="code-title">main.rs</div>"#));
        assert!(out.html.contains("highlight"));
    }

    #[test]
    fn test_math_is_rendered_as_spans() {
        let renderer = MdxRenderer::new();
        let out = renderer.render("Euler: $e^{i\\pi} + 1 = 0$\n\n$$\\int_0^1 x dx$$");
        assert!(out.html.contains(r#"class="math math-inline""#));
        assert!(out.html.contains(r#"class="math math-display""#));
    }

    #[test]
    fn test_unterminated_fence_degrades_gracefully() {
        let renderer = MdxRenderer::new();
        let out = renderer.render("```rust\nfn main() {}");
        assert!(!out.html.is_empty());
    }
}
