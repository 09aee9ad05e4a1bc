/// Canonical comparison key for a URL.
///
/// Drops a single trailing `/` or `#`. Only one character is removed, so
/// `http://a.com//` becomes `http://a.com/`. Anything else, including
/// malformed URLs and the empty string, is returned unchanged.
pub fn normalize(url: &str) -> &str {
    url.strip_suffix(&['/', '#'][..]).unwrap_or(url)
}
