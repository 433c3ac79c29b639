//! Markdown rendering.
//!
//! Converts a document body into render-ready HTML with the extensions the
//! content format relies on: tables, strikethrough, footnotes, language
//! classes on fenced code blocks, and slugified heading ids with trailing
//! anchor links.

use crate::utils::slug::slugify_heading;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};
use std::collections::HashMap;

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_FOOTNOTES);
    opts
}

/// Render a markdown body to an HTML string.
///
/// Fenced code blocks keep their language as a `language-*` class on the
/// `<code>` element, which is the hook highlighting layers key on.
pub fn render_markdown(body: &str) -> String {
    let events: Vec<Event> = Parser::new_ext(body, parser_options()).collect();
    let events = assign_heading_anchors(events);

    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// Give every heading a slugified id and a trailing anchor link.
///
/// Repeated heading texts get `-1`, `-2`, ... suffixes so ids stay unique
/// within one document.
fn assign_heading_anchors(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(events.len());
    let mut events = events.into_iter();

    while let Some(event) = events.next() {
        let (level, id, classes, attrs) = match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => (level, id, classes, attrs),
            other => {
                out.push(other);
                continue;
            }
        };

        // Headings cannot nest: buffer until the matching end tag
        let mut inner = Vec::new();
        loop {
            match events.next() {
                Some(Event::End(TagEnd::Heading(_))) | None => break,
                Some(event) => inner.push(event),
            }
        }

        let base = match &id {
            Some(explicit) => explicit.to_string(),
            None => slugify_heading(&heading_text(&inner)),
        };
        let unique = uniquify(&mut seen, base);
        let anchor = format!(
            "<a class=\"heading-anchor\" href=\"#{unique}\" aria-hidden=\"true\">#</a>"
        );

        out.push(Event::Start(Tag::Heading {
            level,
            id: Some(unique.into()),
            classes,
            attrs,
        }));
        out.extend(inner);
        out.push(Event::Html(anchor.into()));
        out.push(Event::End(TagEnd::Heading(level)));
    }

    out
}

/// Concatenate the visible text of a heading's inner events.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// Reserve a unique id for `base`, suffixing repeats with a counter.
fn uniquify(seen: &mut HashMap<String, usize>, base: String) -> String {
    let count = seen.entry(base.clone()).or_insert(0);
    let id = if *count == 0 {
        base.clone()
    } else {
        format!("{base}-{count}")
    };
    *count += 1;
    id
}

// ============================================================================
// Tests
// ============================================================================
