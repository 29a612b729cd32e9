use std::borrow::Cow;

use tracing::debug;
use url::Url;

/// Extracts the querystring from a URL, or passes a bare querystring through.
///
/// - An absolute URL (`https://host/path?a=1#frag`) yields its query
///   component, or `""` if it has none.
/// - Anything else yields the text after the first `?`, up to any `#`.
/// - Text with no `?` at all is taken to be the querystring itself, unless it
///   contains a `/`, in which case it is a path and there is no query.
///
/// ```
/// use query_build::query_from_url;
///
/// assert_eq!(query_from_url("https://example.com/search?q=rust#top"), "q=rust");
/// assert_eq!(query_from_url("/search?q=rust"), "q=rust");
/// assert_eq!(query_from_url("q=rust&page=2"), "q=rust&page=2");
/// assert_eq!(query_from_url("/search/results"), "");
/// assert_eq!(query_from_url("https://example.com/search"), "");
/// ```
pub fn query_from_url(input: &str) -> Cow<'_, str> {
    match Url::parse(input) {
        Ok(url) if !url.cannot_be_a_base() => {
            Cow::Owned(url.query().unwrap_or_default().to_owned())
        }
        _ => Cow::Borrowed(split_query(input)),
    }
}

fn split_query(input: &str) -> &str {
    let input = input.split_once('#').map_or(input, |(before, _)| before);
    match input.split_once('?') {
        Some((_, query)) => query,
        None if input.contains('/') => {
            debug!(input, "input looks like a path, not a querystring");
            ""
        }
        None => input,
    }
}
