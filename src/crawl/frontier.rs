// src/crawl/frontier.rs
// =============================================================================
// This module owns the two URL collections that drive the crawl:
//
// - visited: every URL we already attempted to fetch, in the order we
//   attempted it. This order is significant - it becomes the order of the
//   <url> entries in the generated sitemap.
// - pending: discovered, in-scope URLs waiting for their fetch attempt.
//
// Both collections have set semantics (no duplicates), and a URL is never
// in both at once. The frontier is the only place these invariants are
// enforced, so no other module mutates the collections directly.
//
// Rust concepts:
// - HashSet: O(1) membership checks mirroring each Vec
// - Vec as a stack: push/pop at the end gives us LIFO (depth-first) order
// =============================================================================

use std::collections::HashSet;

// The combined visited + pending URL tracking structure.
//
// Each Vec carries the order, each HashSet mirrors it for fast membership
// checks. The mirrors are private and always kept in sync by the methods
// below.
#[derive(Debug)]
pub struct Frontier {
    visited: Vec<String>,
    visited_set: HashSet<String>,
    pending: Vec<String>,
    pending_set: HashSet<String>,
}

impl Frontier {
    // Creates a frontier with the seed URL as the only pending entry
    pub fn new(seed: &str) -> Self {
        Self {
            visited: Vec::new(),
            visited_set: HashSet::new(),
            pending: vec![seed.to_string()],
            pending_set: HashSet::from([seed.to_string()]),
        }
    }

    // Takes the next URL to fetch, moving it from pending to visited.
    //
    // Pops the most-recently-added pending URL (LIFO), so the traversal is
    // depth-first. The URL counts as visited from this moment on, before
    // its fetch even starts - a failed fetch still leaves it visited.
    //
    // Returns None when the pending set is empty, which is the crawl's one
    // and only termination condition.
    pub fn next(&mut self) -> Option<String> {
        let url = self.pending.pop()?;
        self.pending_set.remove(&url);
        self.visited_set.insert(url.clone());
        self.visited.push(url.clone());
        Some(url)
    }

    // Schedules a URL for fetching, unless we already know about it.
    //
    // A URL that is already visited or already pending is silently dropped;
    // this is what breaks cycles in the link graph and guarantees every
    // page is fetched at most once.
    pub fn enqueue(&mut self, url: String) {
        if self.visited_set.contains(&url) || self.pending_set.contains(&url) {
            return;
        }
        self.pending_set.insert(url.clone());
        self.pending.push(url);
    }

    // Read-only snapshot of the visited URLs, in visit order
    #[cfg(test)]
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    // Read-only snapshot of the URLs still awaiting a fetch
    #[cfg(test)]
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    // Consumes the frontier, yielding the final ordered visited list
    pub fn into_visited(self) -> Vec<String> {
        self.visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_first_out() {
        let mut frontier = Frontier::new("https://example.com/");
        assert_eq!(frontier.next().as_deref(), Some("https://example.com/"));
        assert_eq!(frontier.next(), None);
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut frontier = Frontier::new("https://example.com/");
        frontier.next();
        frontier.enqueue("https://example.com/a".to_string());
        frontier.enqueue("https://example.com/b".to_string());
        assert_eq!(frontier.next().as_deref(), Some("https://example.com/b"));
        assert_eq!(frontier.next().as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn test_duplicate_enqueue_is_dropped() {
        let mut frontier = Frontier::new("https://example.com/");
        frontier.next();
        frontier.enqueue("https://example.com/a".to_string());
        frontier.enqueue("https://example.com/a".to_string());
        assert_eq!(frontier.pending().len(), 1);
    }

    #[test]
    fn test_visited_url_is_never_requeued() {
        let mut frontier = Frontier::new("https://example.com/");
        frontier.next();
        // A link back to the seed (a cycle) must not re-enter the queue
        frontier.enqueue("https://example.com/".to_string());
        assert_eq!(frontier.pending().len(), 0);
        assert_eq!(frontier.next(), None);
    }

    #[test]
    fn test_visited_and_pending_are_disjoint() {
        let mut frontier = Frontier::new("https://example.com/");
        frontier.next();
        frontier.enqueue("https://example.com/a".to_string());
        frontier.next();
        for url in frontier.visited() {
            assert!(!frontier.pending().contains(url));
        }
        assert_eq!(
            frontier.visited(),
            &["https://example.com/", "https://example.com/a"]
        );
    }
}
