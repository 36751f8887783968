//! Markdown to sanitized HTML.

use pulldown_cmark::{html, Event, Options, Parser};

/// Renders GitHub-flavoured Markdown as sanitized HTML.
///
/// Single line breaks become `<br>`, headings get no generated ids, and any
/// raw HTML in the input goes through `ammonia` before it is returned.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut unsafe_html = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut unsafe_html, parser);

    ammonia::clean(&unsafe_html)
}
