use pulldown_cmark::{html, Event, Parser};

/// CommonMark to html. Raw html in the source is escaped, not passed through
pub fn to_html(source: &str) -> String {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        e => e,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
