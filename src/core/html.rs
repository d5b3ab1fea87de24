// src/core/html.rs
use scraper::{ Html, Selector };

/// Content of `<meta name="{name}" content="…">`, if the page has one.
/// Name matching is exact; the first matching tag wins.
pub fn meta_content(doc: &str, name: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[name="{name}"]"#)).ok()?;
    let html = Html::parse_document(doc);
    let content = html.select(&selector)
        .next()?
        .value()
        .attr("content")
        .map(|s| s.to_string());
    content
}
