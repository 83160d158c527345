use http::uri::InvalidUri;

#[derive(Debug)]
pub enum Error {
    /// The edited url no longer parses as a `Uri`, usually because the value holds characters
    /// that must be percent-encoded first.
    InvalidUri(InvalidUri),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidUri(e) => write!(f, "Invalid Uri: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidUri(e) => Some(e),
        }
    }
}

impl From<InvalidUri> for Error {
    fn from(value: InvalidUri) -> Self {
        Error::InvalidUri(value)
    }
}
