// src/extract.rs
// =============================================================================
// This module extracts anchor targets from HTML.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// The contract is deliberately dumb: return every href on every <a> tag,
// in document order, with no filtering or resolution. Deciding which of
// those hrefs matter is the scope module's job, not this one's.
// =============================================================================

use scraper::{Html, Selector};

// Returns all raw href attribute values from anchor elements, in document
// order.
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='#'>Top</a>"
//   result = ["/docs", "#"]
pub fn extract_links(html: &str) -> Vec<String> {
    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
