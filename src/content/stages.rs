//! Built-in transform stages
//!
//! Each stage is a pure `Vec<Event> -> Vec<Event>` transform; the fixed
//! chain order lives in [`super::MdxRenderer`].

use std::collections::HashMap;

use lazy_static::lazy_static;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use regex::Regex;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::TransformStage;

lazy_static! {
    /// Fence info of the form `lang:title`, e.g. ```rust:main.rs
    static ref CODE_TITLE_RE: Regex = Regex::new(r"^([^:\s]*):(\S.*)$").unwrap();
}

/// Injects a slugified `id` attribute into headings that lack one
///
/// Duplicate heading texts get `-1`, `-2`, ... suffixes so ids stay
/// unique within a document.
pub struct HeadingIds;

impl TransformStage for HeadingIds {
    fn name(&self) -> &'static str {
        "heading-ids"
    }

    fn apply<'a>(&self, mut events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut seen: HashMap<String, usize> = HashMap::new();

        let mut i = 0;
        while i < events.len() {
            let needs_id = matches!(
                &events[i],
                Event::Start(Tag::Heading { id: None, .. })
            );
            if needs_id {
                let mut text = String::new();
                for event in events.iter().skip(i + 1) {
                    match event {
                        Event::End(TagEnd::Heading(_)) => break,
                        Event::Text(t) | Event::Code(t) => text.push_str(t),
                        _ => {}
                    }
                }

                let base = slug::slugify(&text);
                let base = if base.is_empty() {
                    "section".to_string()
                } else {
                    base
                };
                let n = seen.entry(base.clone()).or_insert(0);
                let heading_id = if *n == 0 {
                    base.clone()
                } else {
                    format!("{}-{}", base, n)
                };
                *n += 1;

                if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
                    *id = Some(CowStr::from(heading_id));
                }
            }
            i += 1;
        }

        events
    }
}

/// Extracts a title from fenced code info strings
///
/// ```` ```rust:main.rs ```` becomes a `<div class="code-title">` element
/// followed by a plain `rust` fence.
pub struct CodeTitles;

impl TransformStage for CodeTitles {
    fn name(&self) -> &'static str {
        "code-titles"
    }

    fn apply<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut out = Vec::with_capacity(events.len());

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                    let parsed = CODE_TITLE_RE.captures(&info).map(|caps| {
                        (
                            caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string(),
                            caps.get(2).map(|m| m.as_str()).unwrap_or("").to_string(),
                        )
                    });
                    match parsed {
                        Some((lang, title)) => {
                            out.push(Event::Html(CowStr::from(format!(
                                r#"<div class="code-title">{}</div>"#,
                                escape_html(&title)
                            ))));
                            out.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(
                                CowStr::from(lang),
                            ))));
                        }
                        None => {
                            out.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))));
                        }
                    }
                }
                other => out.push(other),
            }
        }

        out
    }
}

/// Replaces code blocks with syntect-highlighted HTML
pub struct SyntaxHighlight {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl SyntaxHighlight {
    pub fn with_theme(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
        }
    }

    /// Highlight one code block; falls back to escaped plain text when
    /// highlighting fails
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .unwrap_or_else(|| {
                self.theme_set
                    .themes
                    .values()
                    .next()
                    .expect("No themes available")
            });

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => {
                format!(
                    r#"<figure class="highlight {}">{}</figure>"#,
                    lang, highlighted
                )
            }
            Err(_) => {
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang,
                    escape_html(code)
                )
            }
        }
    }
}

impl TransformStage for SyntaxHighlight {
    fn name(&self) -> &'static str {
        "syntax-highlight"
    }

    fn apply<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut out = Vec::with_capacity(events.len());
        let mut in_code_block = false;
        let mut code_lang: Option<String> = None;
        let mut code_content = String::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let highlighted = self.highlight_code(&code_content, code_lang.as_deref());
                    out.push(Event::Html(CowStr::from(highlighted)));
                    in_code_block = false;
                    code_lang = None;
                }
                Event::Text(text) if in_code_block => {
                    code_content.push_str(&text);
                }
                other => out.push(other),
            }
        }

        out
    }
}

/// Renders inline and display math as annotated HTML spans
pub struct MathSpans;

impl TransformStage for MathSpans {
    fn name(&self) -> &'static str {
        "math-spans"
    }

    fn apply<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        events
            .into_iter()
            .map(|event| match event {
                Event::InlineMath(tex) => Event::InlineHtml(CowStr::from(format!(
                    r#"<span class="math math-inline">{}</span>"#,
                    escape_html(&tex)
                ))),
                Event::DisplayMath(tex) => Event::Html(CowStr::from(format!(
                    r#"<span class="math math-display">{}</span>"#,
                    escape_html(&tex)
                ))),
                other => other,
            })
            .collect()
    }
}

/// Prepends an anchor link inside every heading that carries an id
pub struct AnchorLinks;

impl TransformStage for AnchorLinks {
    fn name(&self) -> &'static str {
        "anchor-links"
    }

    fn apply<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut out = Vec::with_capacity(events.len());

        for event in events {
            let anchor = match &event {
                Event::Start(Tag::Heading { id: Some(id), .. }) => Some(format!(
                    r##"<a class="anchor" href="#{}" aria-hidden="true"></a>"##,
                    id
                )),
                _ => None,
            };
            out.push(event);
            if let Some(anchor) = anchor {
                out.push(Event::InlineHtml(CowStr::from(anchor)));
            }
        }

        out
    }
}

/// Simple HTML escaping
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
