//! Set, replace or remove a single query parameter on a url.
//!
//! ```
//! use queryedit::{query_value, remove, set};
//!
//! let url = set("https://example.com/list?page=3&sort=name", "page", "4");
//! assert_eq!(url, "https://example.com/list?sort=name&page=4");
//! assert_eq!(query_value(&url, "page"), Some("4"));
//!
//! assert_eq!(remove(&url, "sort"), "https://example.com/list?page=4");
//! ```
//!
//! With the default `uri` feature the same edits are available on `http::Uri` and
//! `http::Request` through [`UriExt`] and [`RequestExt`].

pub mod query;
pub mod url_decoding;

#[cfg(feature = "uri")]
pub mod error;
#[cfg(feature = "uri")]
pub mod http_utils;


pub use query::{query_value, remove, set, update, Entry, SplitUrl};

#[cfg(feature = "uri")]
pub use error::Error;
#[cfg(feature = "uri")]
pub use http_utils::{RequestExt, UriExt};

#[cfg(feature = "uri")]
pub use http;
