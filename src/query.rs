//! Editing a single parameter in the query string of a URL.
//!
//! Everything here works on plain strings. The url is split at its first `?`, the query is
//! split on `&`, and entries are matched by their percent-decoded name. Entries that are
//! not touched keep their original text and order; values are never decoded.

use std::borrow::Cow;

use crate::url_decoding::decode_name;

/// A url split at its first `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitUrl<'a> {
    /// Everything before the first `?`.
    pub base: &'a str,

    /// Everything after the first `?`, if there is one.
    pub query: Option<&'a str>,
}

impl<'a> SplitUrl<'a> {
    pub fn parse(url: &'a str) -> Self {
        match url.split_once('?') {
            Some((base, query)) => SplitUrl {
                base,
                query: Some(query),
            },
            None => SplitUrl {
                base: url,
                query: None,
            },
        }
    }

    /// Iterate the `&` separated entries of the query. An absent or empty query yields
    /// nothing.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'a>> {
        self.query
            .filter(|query| !query.is_empty())
            .into_iter()
            .flat_map(|query| query.split('&'))
            .map(Entry)
    }

    /// Raw value of the last entry whose decoded name is `name`.
    pub fn value(&self, name: &str) -> Option<&'a str> {
        self.entries()
            .filter(|entry| entry.is_named(name))
            .last()
            .map(|entry| entry.value().unwrap_or(""))
    }
}

/// One raw `name=value` (or bare `name`) segment of a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a>(pub &'a str);

impl<'a> Entry<'a> {
    /// The original text of the entry.
    pub fn raw(&self) -> &'a str {
        self.0
    }

    /// Text before the first `=`.
    pub fn name(&self) -> &'a str {
        match self.0.split_once('=') {
            Some((name, _)) => name,
            None => self.0,
        }
    }

    pub fn decoded_name(&self) -> Cow<'a, str> {
        decode_name(self.name())
    }

    /// Text after the first `=`, verbatim. `None` for a bare entry.
    pub fn value(&self) -> Option<&'a str> {
        self.0.split_once('=').map(|(_, value)| value)
    }

    fn is_named(&self, name: &str) -> bool {
        self.decoded_name() == name
    }
}

/// Set `name` to `value` in the query string of `url`, or remove it when `value` is `None`.
///
/// Every existing occurrence of `name` is dropped. A set parameter is appended after the
/// remaining entries, so at most one occurrence is ever left. `Some("")` sets an empty value.
///
/// ```
/// use queryedit::update;
///
/// assert_eq!(update("http://x/?a=1&b=2&a=3", "a", Some("9")), "http://x/?b=2&a=9");
/// assert_eq!(update("http://x/?a=1&b=2", "a", None), "http://x/?b=2");
/// assert_eq!(update("http://x/?a=1", "a", None), "http://x/");
/// ```
pub fn update(url: &str, name: &str, value: Option<&str>) -> String {
    let split = SplitUrl::parse(url);

    let (dropped, kept): (Vec<_>, Vec<_>) =
        split.entries().partition(|entry| entry.is_named(name));

    tracing::trace!(
        param = name,
        set = value.is_some(),
        dropped = dropped.len(),
        "updating query parameter"
    );

    // An empty kept entry still takes a separator.
    let mut query = kept.iter().map(Entry::raw).collect::<Vec<_>>().join("&");

    if let Some(value) = value {
        if !kept.is_empty() {
            query.push('&');
        }

        query.push_str(name);
        query.push('=');
        query.push_str(value);
    }

    if query.is_empty() {
        return split.base.to_string();
    }

    format!("{}?{}", split.base, query)
}

/// Shorthand for [`update`] with a value.
pub fn set(url: &str, name: &str, value: &str) -> String {
    update(url, name, Some(value))
}

/// Shorthand for [`update`] without a value.
pub fn remove(url: &str, name: &str) -> String {
    update(url, name, None)
}

/// Raw value of the last entry in `url` whose decoded name is `name`.
///
/// A bare entry yields `Some("")`.
///
/// ```
/// use queryedit::query_value;
///
/// assert_eq!(query_value("/search?q=rust&page=2&q=cargo", "q"), Some("cargo"));
/// assert_eq!(query_value("/search?debug", "debug"), Some(""));
/// assert_eq!(query_value("/search", "q"), None);
/// ```
pub fn query_value<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    SplitUrl::parse(url).value(name)
}
