//! Markdown to HTML for prose blocks.
//!
//! Prose sits under the block's own `<h3>`, so Markdown headings are pushed
//! down to nest beneath it.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

/// Heading level of the block title every prose body is rendered under.
const BLOCK_HEADING_LEVEL: usize = 3;

pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    // Raw HTML is dropped; prose is rendered from Markdown only.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Heading { level, id, classes, attrs }) => {
            Some(Event::Start(Tag::Heading { level: nested_level(level), id, classes, attrs }))
        }
        Event::End(TagEnd::Heading(level)) => Some(Event::End(TagEnd::Heading(nested_level(level)))),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Shift a heading below the block title, clamping at `<h6>`.
fn nested_level(level: HeadingLevel) -> HeadingLevel {
    HeadingLevel::try_from((level as usize + BLOCK_HEADING_LEVEL).min(6)).unwrap_or(HeadingLevel::H6)
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;
