//! In-page anchor scrolling for `[data-scroll-link]` elements.

/// The fragment selector to scroll to, when `href` is an in-page anchor.
///
/// Anything else (missing, empty, absolute or relative URLs) is left to the
/// browser's default navigation.
#[must_use]
pub fn fragment_selector(href: Option<&str>) -> Option<&str> {
    href.filter(|h| h.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_hrefs_are_selectors() {
        assert_eq!(fragment_selector(Some("#contact")), Some("#contact"));
    }

    #[test]
    fn other_hrefs_are_ignored() {
        assert_eq!(fragment_selector(None), None);
        assert_eq!(fragment_selector(Some("")), None);
        assert_eq!(fragment_selector(Some("/pricing#plans")), None);
        assert_eq!(fragment_selector(Some("https://example.com")), None);
    }
}
