// src/crawl/mod.rs
// =============================================================================
// This module is the crawl core.
//
// Submodules:
// - frontier: the visited/pending URL sets and their invariants
// - scope: turning raw hrefs into in-scope canonical URLs (or dropping them)
// - crawler: the loop that ties frontier, fetching and extraction together
//
// This file (mod.rs) is the module root - it re-exports the public API so
// the rest of the application doesn't depend on our internal layout.
// =============================================================================

mod crawler;
mod frontier;
mod scope;

pub use crawler::{Crawler, LogReporter, Reporter};
pub use scope::{canonicalize, site_domain};
