//! Markdown-to-HTML rendering for note bodies.
//!
//! Raw HTML in the source is downgraded to escaped text, so the output is
//! safe to hand straight to a display surface.

use pulldown_cmark::{html, Event, Options, Parser};

pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        // push_html escapes Text events, so raw HTML comes out inert
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
