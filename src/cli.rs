// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The interface is deliberately tiny: one required flag, the seed URL.
// Everything else (output file name, crawl scope) is derived from it.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitemap-gen",
    version = "0.1.0",
    about = "Generate an XML sitemap for a website by crawling it",
    long_about = "sitemap-gen crawls every same-domain page reachable from the given seed URL \
                  and writes a sitemaps.org 0.9 XML sitemap named sitemap-{domain}.xml \
                  into the current directory."
)]
pub struct Cli {
    /// URL of the site to crawl (e.g., https://example.com)
    ///
    /// Must be an absolute URL; the crawl never leaves this URL's prefix.
    #[arg(short, long)]
    pub url: String,
}
