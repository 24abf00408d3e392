//! Duplicate-slash collapsing.

/// Collapses runs of `/` into a single slash.
///
/// A run directly after `:` keeps up to two slashes so `http://` and
/// `https://` survive; `http:///x` becomes `http://x`.
pub fn collapse_slashes(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let mut prev: Option<char> = None;
    let mut chars = url.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '/' {
            out.push(c);
            prev = Some(c);
            continue;
        }
        let mut run = 1;
        while chars.peek() == Some(&'/') {
            chars.next();
            run += 1;
        }
        let keep = if prev == Some(':') { run.min(2) } else { 1 };
        out.extend(std::iter::repeat('/').take(keep));
        prev = Some('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_slashes_survive() {
        assert_eq!(collapse_slashes("http://a.com/x"), "http://a.com/x");
        assert_eq!(collapse_slashes("https://a.com//x///y"), "https://a.com/x/y");
    }

    #[test]
    fn triple_after_colon_keeps_two() {
        assert_eq!(collapse_slashes("http:///x"), "http://x");
        assert_eq!(collapse_slashes("http:/x"), "http:/x");
    }

    #[test]
    fn colon_inside_path_protects_run() {
        assert_eq!(collapse_slashes("http://a.com/p:////q"), "http://a.com/p://q");
    }

    #[test]
    fn trailing_run() {
        assert_eq!(collapse_slashes("a.com///"), "a.com/");
    }
}
