// src/fetch.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// The crawler only needs one capability from the network: "give me the
// body for this URL, or fail". We express that as the Fetch trait so the
// crawl loop can be tested against an in-memory fake instead of a real
// web server.
//
// The production implementation wraps a reqwest Client. We treat any
// non-2xx status as a failure - the crawler doesn't interpret redirects
// or content types, it just wants HTML-parseable text.
//
// Rust concepts:
// - async-trait: async methods in traits (not yet free in stable traits)
// - reqwest::Client: connection-pooling HTTP client, cheap to clone
// =============================================================================

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// The fetch contract: URL in, document body out (or an error).
//
// Network errors, timeouts and bad statuses all surface as Err; the
// caller decides what a failed fetch means for the crawl.
#[async_trait]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<String>;
}

// Fetches pages with reqwest
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        // One client for the whole crawl (connection pooling), with a
        // timeout so a hung server can't stall the run forever
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {}", response.status()));
        }

        let body = response.text().await?;
        Ok(body)
    }
}
