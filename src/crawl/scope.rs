// src/crawl/scope.rs
// =============================================================================
// This module decides which discovered hrefs belong to the crawl.
//
// A raw href from a page can be many things: an absolute URL, a relative
// path, a bare fragment, a mailto: link... canonicalize() turns each one
// into either a normalized absolute URL that is in scope, or None (drop it).
//
// Scope is defined by string prefix: a URL is in scope if and only if its
// normalized form starts with the seed URL's normalized form. This one
// check covers other domains, other schemes (mailto:, javascript:, tel:),
// mismatched ports, and relative paths that climb above the seed's base.
//
// Rust concepts:
// - Option<String>: "a valid in-scope URL, or nothing"
// - url::Url::join: RFC 3986 relative-reference resolution
// =============================================================================

use anyhow::{anyhow, Result};
use url::Url;

// Converts a raw href into an in-scope absolute URL, or rejects it.
//
// Steps:
// 1. The literal hrefs "#" and "/" are always rejected - both would only
//    ever point back at a page we reach anyway, and real sites sprinkle
//    them everywhere as placeholder links.
// 2. An href that parses as an absolute URL is kept in its normalized
//    form. One that is a relative reference (no scheme and no host) is
//    resolved against the seed URL. Resolving against the seed rather
//    than the current page is a deliberate simplification: it is exact
//    for sites whose pages share the seed's path root, and it is the
//    behavior the output format was designed around. Anything that
//    parses as neither is rejected.
// 3. The resolved URL must start with the seed's string prefix.
//
// Examples (seed = "https://example.com/"):
//   "/about"                  -> Some("https://example.com/about")
//   "https://example.com/x"   -> Some("https://example.com/x")
//   "https://other.com/x"     -> None (out of domain)
//   "//cdn.example.com/x"     -> None (resolves to another host)
//   "mailto:hi@example.com"   -> None (prefix check fails)
//   "#" or "/"                -> None (always)
pub fn canonicalize(href: &str, seed: &Url) -> Option<String> {
    if href == "#" || href == "/" {
        return None;
    }

    let resolved = match Url::parse(href) {
        // Already absolute - Url::parse also normalizes it for us
        Ok(url) => url,
        // No scheme and no host: a relative reference, resolve it
        // against the seed (protocol-relative "//host/x" hrefs resolve
        // here too, borrowing the seed's scheme)
        Err(url::ParseError::RelativeUrlWithoutBase) => seed.join(href).ok()?,
        // Anything else isn't a usable URL at all
        Err(_) => return None,
    };

    let resolved = resolved.to_string();
    if resolved.starts_with(seed.as_str()) {
        Some(resolved)
    } else {
        None
    }
}

// Extracts the domain that names the output file: the seed's host, plus
// the port when one is spelled out (e.g. "localhost:8000")
pub fn site_domain(seed: &Url) -> Result<String> {
    let host = seed
        .host_str()
        .ok_or_else(|| anyhow!("URL has no host: {}", seed))?;
    Ok(match seed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_rejects_literal_fragment_and_slash() {
        assert_eq!(canonicalize("#", &seed()), None);
        assert_eq!(canonicalize("/", &seed()), None);
    }

    #[test]
    fn test_resolves_relative_path_against_seed() {
        assert_eq!(
            canonicalize("/about", &seed()),
            Some("https://example.com/about".to_string())
        );
        assert_eq!(
            canonicalize("contact.html", &seed()),
            Some("https://example.com/contact.html".to_string())
        );
    }

    #[test]
    fn test_keeps_in_scope_absolute_url() {
        assert_eq!(
            canonicalize("https://example.com/about", &seed()),
            Some("https://example.com/about".to_string())
        );
    }

    #[test]
    fn test_rejects_other_domain() {
        assert_eq!(canonicalize("https://other.com/x", &seed()), None);
    }

    #[test]
    fn test_rejects_other_scheme() {
        assert_eq!(canonicalize("mailto:hi@example.com", &seed()), None);
        assert_eq!(canonicalize("javascript:void(0)", &seed()), None);
        assert_eq!(canonicalize("tel:+15551234567", &seed()), None);
    }

    #[test]
    fn test_rejects_mismatched_scheme_same_host() {
        // http:// page on an https:// seed fails the prefix check
        assert_eq!(canonicalize("http://example.com/x", &seed()), None);
    }

    #[test]
    fn test_protocol_relative_href() {
        // Same host: resolves under the seed's scheme and stays in scope
        assert_eq!(
            canonicalize("//example.com/x", &seed()),
            Some("https://example.com/x".to_string())
        );
        // Different host: resolves, then fails the prefix check
        assert_eq!(canonicalize("//cdn.example.com/x", &seed()), None);
    }

    #[test]
    fn test_rejects_traversal_above_seed_base() {
        let seed = Url::parse("https://example.com/docs/").unwrap();
        // Resolves to https://example.com/other - outside the docs/ prefix
        assert_eq!(canonicalize("../other", &seed), None);
        // But staying inside the prefix is fine
        assert_eq!(
            canonicalize("guide.html", &seed),
            Some("https://example.com/docs/guide.html".to_string())
        );
    }

    #[test]
    fn test_site_domain_without_port() {
        assert_eq!(site_domain(&seed()).unwrap(), "example.com");
    }

    #[test]
    fn test_site_domain_with_port() {
        let seed = Url::parse("http://localhost:8000/").unwrap();
        assert_eq!(site_domain(&seed).unwrap(), "localhost:8000");
    }
}
