// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Parse and validate the seed URL (bad seed = fail fast, no crawling)
// 3. Crawl the site to exhaustion
// 4. Write the sitemap file and report where it landed
// 5. Exit with proper code (0 = success, 1 = error)
//
// Per-page errors never reach this level - the crawler swallows them and
// keeps going. Only a bad seed URL or a failed sitemap write can make the
// program exit non-zero.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - frontier, scoping, crawl loop
mod extract; // src/extract.rs - anchor href extraction
mod fetch; // src/fetch.rs - HTTP fetching
mod sitemap; // src/sitemap.rs - XML sitemap serialization

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use url::Url;

use cli::Cli;
use crawl::{site_domain, Crawler, LogReporter};
use fetch::HttpFetcher;

// The #[tokio::main] attribute transforms our async main into a real main
// function, creating a tokio runtime and running our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    // Default to info-level logging so per-URL progress is visible
    // without setting RUST_LOG; the env var still overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // An unparsable seed is a configuration error - abort before any crawling
    let seed = Url::parse(&cli.url)
        .with_context(|| format!("Invalid URL '{}'", cli.url))?;
    let domain = site_domain(&seed)?;

    println!("🔍 Crawling {}", seed);

    let fetcher = HttpFetcher::new()?;
    let visited = Crawler::new(seed, fetcher, LogReporter).run().await;

    println!("📄 Visited {} page(s)", visited.len());

    // The sitemap lands in the working directory, named after the domain
    let path = sitemap::write_sitemap(Path::new("."), &domain, &visited)?;

    println!("✅ Sitemap written to {}", path.display());

    Ok(())
}
