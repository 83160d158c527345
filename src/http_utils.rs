//! This module provides extension traits applying query edits to `http` types.

use http::{Request, Uri};

use crate::{error::Error, query};

/// `Uri` Extension trait
pub trait UriExt: Sized {
    /// Set `name` to `value` in the query of this `Uri`, or remove it when `value` is `None`.
    /// Returns `Err` if the edited text is not a valid `Uri`.
    fn with_param(&self, name: &str, value: Option<&str>) -> Result<Self, Error>;

    /// Raw value of the last query entry named `name`.
    fn param(&self, name: &str) -> Option<&str>;
}

impl UriExt for Uri {
    fn with_param(&self, name: &str, value: Option<&str>) -> Result<Uri, Error> {
        let edited = query::update(&self.to_string(), name, value);

        edited.parse::<Uri>().map_err(|e| {
            tracing::debug!(uri = %edited, error = %e, "edited uri does not parse");

            Error::from(e)
        })
    }

    fn param(&self, name: &str) -> Option<&str> {
        query::SplitUrl {
            base: self.path(),
            query: self.query(),
        }
        .value(name)
    }
}

/// `Request` Extension trait
pub trait RequestExt {
    /// Edit the query of the request uri in place. On `Err` the request is left unchanged.
    fn set_param(&mut self, name: &str, value: Option<&str>) -> Result<(), Error>;
}

impl<B> RequestExt for Request<B> {
    fn set_param(&mut self, name: &str, value: Option<&str>) -> Result<(), Error> {
        let uri = self.uri().with_param(name, value)?;

        *self.uri_mut() = uri;

        Ok(())
    }
}
