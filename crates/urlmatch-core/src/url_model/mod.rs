//! URL modeling: normalization and path extraction.
//!
//! Every comparison in the matcher runs on the canonical form produced by
//! [`normalize_url`]. The rules are heuristic and lossy: inputs are assumed to
//! be either domain-first (`example.com/a`) or path-first (`/a/b`), and
//! anything else (protocol-relative, garbage) is normalized mechanically
//! without any attempt to repair it.

mod path;
mod percent;
mod slashes;

pub use path::{path_segments, url_path};
pub use percent::percent_decode;
pub use slashes::collapse_slashes;

/// Prefix for domain-first inputs (`example.com/a` → `http://example.com/a`).
const DOMAIN_PREFIX: &str = "http://";
/// Prefix for path-first inputs. Concatenated with a leading `/`, so `/a`
/// becomes `http://a`.
const PATH_PREFIX: &str = "http:/";

/// Canonicalizes a raw URL value.
///
/// Missing values and whitespace-only strings become `""`, which the matcher
/// treats as absent.
///
/// # Examples
///
/// - `normalize_url(Some(" example.com//a//b "))` → `"http://example.com/a/b"`
/// - `normalize_url(Some("https://x.com/a%20b"))` → `"https://x.com/a b"`
/// - `normalize_url(None)` → `""`
pub fn normalize_url(raw: Option<&str>) -> String {
    let trimmed = match raw {
        Some(s) => s.trim(),
        None => return String::new(),
    };
    if trimmed.is_empty() {
        return String::new();
    }

    let with_scheme = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else if trimmed.starts_with('/') {
        format!("{PATH_PREFIX}{trimmed}")
    } else {
        format!("{DOMAIN_PREFIX}{trimmed}")
    };

    percent_decode(&collapse_slashes(&with_scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_blank_become_empty() {
        assert_eq!(normalize_url(None), "");
        assert_eq!(normalize_url(Some("")), "");
        assert_eq!(normalize_url(Some("   \t ")), "");
    }

    #[test]
    fn domain_first_gets_full_scheme() {
        assert_eq!(
            normalize_url(Some("example.com//a//b")),
            "http://example.com/a/b"
        );
        assert_eq!(normalize_url(Some("  www.site.org  ")), "http://www.site.org");
    }

    #[test]
    fn path_first_gets_single_slash_prefix() {
        // `http:/` + `/about` reads as a host named "about"; accepted as lossy.
        assert_eq!(normalize_url(Some("/about")), "http://about");
        assert_eq!(normalize_url(Some("/blog//post")), "http://blog/post");
    }

    #[test]
    fn existing_scheme_is_kept() {
        assert_eq!(
            normalize_url(Some("https://x.com/a%20b ")),
            "https://x.com/a b"
        );
        assert_eq!(normalize_url(Some("http:///x")), "http://x");
        // Anything starting with "http" counts as already having a scheme.
        assert_eq!(normalize_url(Some("httpfoo")), "httpfoo");
    }

    #[test]
    fn protocol_relative_is_not_repaired() {
        assert_eq!(normalize_url(Some("//cdn.com/x")), "http://cdn.com/x");
    }

    #[test]
    fn decodes_after_collapsing() {
        assert_eq!(normalize_url(Some("caf%C3%A9")), "http://café");
        // An encoded slash is decoded after the collapse step and survives.
        assert_eq!(
            normalize_url(Some("http://a.com/x%2F%2Fy")),
            "http://a.com/x//y"
        );
    }
}
