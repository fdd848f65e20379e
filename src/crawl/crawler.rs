// src/crawl/crawler.rs
// =============================================================================
// This module drives the crawl: pop a pending URL, fetch it, extract its
// links, scope them, enqueue the new ones, repeat until nothing is pending.
//
// The loop is an explicit iteration over the frontier rather than a
// recursive walk, so a large site can't blow the call stack. With the
// frontier's LIFO pop this is a depth-first traversal.
//
// Two collaborators are injected:
// - a Fetch implementation (real HTTP in production, a fake in tests)
// - a Reporter for per-URL progress, so tests can capture what would be
//   logged without touching any global logger state
//
// Failure policy: a fetch error never stops the crawl. The URL was
// already moved to visited when it was popped, so it still shows up in
// the sitemap exactly once, and the loop just moves on.
// =============================================================================

use url::Url;

use super::frontier::Frontier;
use super::scope::canonicalize;
use crate::extract::extract_links;
use crate::fetch::Fetch;

// Receives per-URL progress events from the crawl.
//
// This replaces ambient global logging inside the loop: the production
// reporter forwards to the log crate, test reporters collect events.
pub trait Reporter {
    /// A URL was popped from the frontier and is about to be fetched
    fn visiting(&mut self, url: &str);

    /// Fetching a URL failed; the crawl continues without it
    fn fetch_failed(&mut self, url: &str, error: &anyhow::Error);
}

// Production reporter: one info line per page, one warn line per failure
pub struct LogReporter;

impl Reporter for LogReporter {
    fn visiting(&mut self, url: &str) {
        log::info!("On URL: {}", url);
    }

    fn fetch_failed(&mut self, url: &str, error: &anyhow::Error) {
        log::warn!("Error occurred while processing URL {}: {:#}", url, error);
    }
}

// Walks the link graph of one site to exhaustion.
//
// Owns the frontier outright; callers only get the final visited list
// back from run().
pub struct Crawler<F, R> {
    seed: Url,
    frontier: Frontier,
    fetcher: F,
    reporter: R,
}

impl<F: Fetch, R: Reporter> Crawler<F, R> {
    pub fn new(seed: Url, fetcher: F, reporter: R) -> Self {
        // The normalized seed string is both the first pending URL and
        // the scope prefix every discovered link is checked against
        let frontier = Frontier::new(seed.as_str());
        Self {
            seed,
            frontier,
            fetcher,
            reporter,
        }
    }

    // Runs the crawl to completion and returns every URL visited, in the
    // order it was first dequeued. Terminates when the pending set is
    // empty - the only termination condition there is.
    pub async fn run(mut self) -> Vec<String> {
        while let Some(url) = self.frontier.next() {
            self.reporter.visiting(&url);

            let body = match self.fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(error) => {
                    // The URL is already in visited; just report and go on
                    self.reporter.fetch_failed(&url, &error);
                    continue;
                }
            };

            for href in extract_links(&body) {
                if let Some(link) = canonicalize(&href, &self.seed) {
                    self.frontier.enqueue(link);
                }
            }
        }

        self.frontier.into_visited()
    }
}
