//! Markdown → standalone HTML document.
//!
//! Raw HTML found in the markdown is copied into the page as-is unless
//! [`RenderOptions::escape_raw_html`] is set. With it set, raw HTML becomes
//! text and link or image destinations outside `http`, `https`, `mailto` and
//! relative URLs are replaced by `#`.

use crate::config::RenderConfig;
use crate::postprocessing::formatter::normalize;
use crate::postprocessing::styles::{
    HIGHLIGHT_CSS_URL, HIGHLIGHT_INIT, HIGHLIGHT_JS_URL, HIGHLIGHT_ON_LOAD, STYLESHEET,
};
use html_escape::encode_double_quoted_attribute;
use maud::{html, PreEscaped, DOCTYPE};
use pulldown_cmark::{html as md_html, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_TITLE: &str = "Generated Content";

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub escape_raw_html: bool,
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            escape_raw_html: config.escape_raw_html,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Normalizes `markdown`, converts it, and wraps it in the styled page.
    /// `title` falls back to [`DEFAULT_TITLE`] when absent or blank.
    pub fn render_document(&self, markdown: &str, title: Option<&str>) -> String {
        let body = self.render_fragment(&normalize(markdown));
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE);

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    link rel="stylesheet" href=(HIGHLIGHT_CSS_URL);
                    script src=(HIGHLIGHT_JS_URL) {}
                    script { (PreEscaped(HIGHLIGHT_INIT)) }
                    style { (PreEscaped(STYLESHEET)) }
                }
                body {
                    (PreEscaped(body))
                    script { (PreEscaped(HIGHLIGHT_ON_LOAD)) }
                }
            }
        }
        .into_string()
    }

    /// Converts markdown to an HTML fragment without normalizing it first.
    pub fn render_fragment(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_STRIKETHROUGH;

        let mut events: Vec<Event> = Parser::new_ext(markdown, options).collect();
        if self.options.escape_raw_html {
            events = events.into_iter().map(escape_untrusted).collect();
        }
        assign_heading_ids(&mut events);
        let events = rewrite_inline(events);

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        md_html::push_html(&mut out, events.into_iter());
        out
    }
}

fn escape_untrusted(event: Event) -> Event {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: neutralize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: neutralize_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn neutralize_url(url: CowStr) -> CowStr {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Relative URLs have no scheme; absolute ones must use an allowed scheme.
/// Whitespace and control characters are ignored, as browsers do.
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();

    match cleaned.find(|c: char| matches!(c, ':' | '/' | '?' | '#')) {
        Some(i) if cleaned[i..].starts_with(':') => SAFE_SCHEMES.contains(&&cleaned[..i]),
        _ => true,
    }
}

/// Gives every heading a unique `id` slugged from its text; repeats get the
/// first free `-1`, `-2`, ... suffix.
fn assign_heading_ids(events: &mut [Event]) {
    let mut used: HashSet<String> = HashSet::new();
    let mut next_suffix: HashMap<String, usize> = HashMap::new();

    for i in 0..events.len() {
        if !matches!(events[i], Event::Start(Tag::Heading { .. })) {
            continue;
        }

        let mut text = String::new();
        for event in &events[i + 1..] {
            match event {
                Event::End(TagEnd::Heading(_)) => break,
                Event::Text(t) | Event::Code(t) => text.push_str(t),
                _ => {}
            }
        }

        let mut base = slug::slugify(&text);
        if base.is_empty() {
            base = "section".to_string();
        }
        let id = if used.insert(base.clone()) {
            base
        } else {
            let suffix = next_suffix.entry(base.clone()).or_insert(1);
            loop {
                let candidate = format!("{}-{}", base, suffix);
                *suffix += 1;
                if used.insert(candidate.clone()) {
                    break candidate;
                }
            }
        };

        if let Event::Start(Tag::Heading { id: slot, .. }) = &mut events[i] {
            *slot = Some(CowStr::from(id));
        }
    }
}

/// Single newlines become `<br />`; absolute links open in a new tab.
fn rewrite_inline(events: Vec<Event>) -> Vec<Event> {
    let mut out = Vec::with_capacity(events.len());
    let mut link_stack: Vec<bool> = Vec::new();

    for event in events {
        match event {
            Event::SoftBreak => out.push(Event::HardBreak),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                if is_external(&dest_url) {
                    let title_attr = if title.is_empty() {
                        String::new()
                    } else {
                        format!(" title=\"{}\"", encode_double_quoted_attribute(&*title))
                    };
                    out.push(Event::InlineHtml(CowStr::from(format!(
                        "<a href=\"{}\"{} target=\"_blank\" rel=\"noopener\">",
                        encode_double_quoted_attribute(&*dest_url),
                        title_attr
                    ))));
                    link_stack.push(true);
                } else {
                    out.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url,
                        title,
                        id,
                    }));
                    link_stack.push(false);
                }
            }
            Event::End(TagEnd::Link) => {
                if link_stack.pop().unwrap_or(false) {
                    out.push(Event::InlineHtml(CowStr::from("</a>")));
                } else {
                    out.push(Event::End(TagEnd::Link));
                }
            }
            other => out.push(other),
        }
    }

    out
}

fn is_external(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
