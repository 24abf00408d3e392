//! Path component extraction and segment splitting.
//!
//! Normalized URLs are decoded and may contain spaces or other characters a
//! strict URL parser would reject or re-encode, so the path is cut out of the
//! string by position instead of going through a full parse.

/// Schemes whose last path segment may carry `;params`, which are not part of
/// the path.
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Returns the path component of a URL string.
///
/// The scheme (`name:`) and `//authority` are skipped, the query and fragment
/// dropped, and `;params` on the last segment removed. Returns `""` when the
/// URL has no path.
///
/// # Examples
///
/// - `url_path("http://a.com/x/y?q=1")` → `"/x/y"`
/// - `url_path("http://a.com")` → `""`
/// - `url_path("httpfoo")` → `"httpfoo"` (no scheme, the whole string is path)
pub fn url_path(url: &str) -> &str {
    let (scheme, mut rest) = split_scheme(url);

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        rest = &after[end..];
    }
    if let Some(i) = rest.find('#') {
        rest = &rest[..i];
    }
    if let Some(i) = rest.find('?') {
        rest = &rest[..i];
    }

    if PARAM_SCHEMES.contains(&scheme.as_str()) {
        rest = strip_params(rest);
    }
    rest
}

/// Splits the path of `url` into its `/`-separated segments after trimming
/// leading and trailing slashes.
///
/// An empty path yields a single empty segment, so two root URLs share one
/// segment.
pub fn path_segments(url: &str) -> Vec<&str> {
    url_path(url).trim_matches('/').split('/').collect()
}

/// Splits off a leading `scheme:` (ASCII letter, then letters, digits, `+`,
/// `-` or `.`). The returned scheme is lowercased; empty when absent.
fn split_scheme(url: &str) -> (String, &str) {
    let Some(colon) = url.find(':') else {
        return (String::new(), url);
    };
    let candidate = &url[..colon];
    let mut chars = candidate.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        (candidate.to_ascii_lowercase(), &url[colon + 1..])
    } else {
        (String::new(), url)
    }
}

fn strip_params(path: &str) -> &str {
    let from = path.rfind('/').unwrap_or(0);
    match path[from..].find(';') {
        Some(i) => &path[..from + i],
        None => path,
    }
}
