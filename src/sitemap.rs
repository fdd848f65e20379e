// src/sitemap.rs
// =============================================================================
// This module serializes the crawl result into a sitemap XML file.
//
// The sitemaps.org 0.9 format is flat enough that we write it with plain
// string building: declaration, <urlset> with the protocol namespaces,
// one <url><loc>...</loc></url> line per page in visit order, closing tag.
//
// URLs are written as-is - no XML escaping. Canonical http(s) URLs are
// already percent-encoded, which keeps them XML-safe.
//
// A write failure here is fatal: unlike a failed page fetch there is no
// way to continue, and the caller loses the crawl's findings.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

const URLSET_OPEN: &str = "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
     xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
     xsi:schemaLocation=\"http://www.sitemaps.org/schemas/sitemap/0.9 \
     http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd\">\n";

// Writes sitemap-{domain}.xml into `dir`, overwriting any existing file,
// with one <url> entry per URL in the given order.
//
// Returns the path of the written file. An empty URL list still produces
// a schema-valid (empty) urlset.
pub fn write_sitemap(dir: &Path, domain: &str, urls: &[String]) -> Result<PathBuf> {
    let path = dir.join(format!("sitemap-{}.xml", domain));

    let mut contents = String::new();
    contents.push_str(XML_DECLARATION);
    contents.push_str(URLSET_OPEN);
    for url in urls {
        contents.push_str("<url><loc>");
        contents.push_str(url);
        contents.push_str("</loc></url>\n");
    }
    contents.push_str("</urlset>");

    fs::write(&path, contents)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    Ok(path)
}
