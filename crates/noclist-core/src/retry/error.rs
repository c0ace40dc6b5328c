//! Failure of a single request attempt.

use std::fmt;

/// Error returned by one attempt against an endpoint (curl failure, unexpected
/// status, or a 200 response that cannot be used).
#[derive(Debug)]
pub enum RequestError {
    /// Curl reported an error (timeout, connection, etc.).
    Curl(curl::Error),
    /// HTTP response status was not 200.
    Http(u32),
    /// 200 response without the expected header (or with an empty value).
    MissingHeader(String),
    /// 200 response whose body is not valid UTF-8.
    InvalidBody(std::string::FromUtf8Error),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Curl(e) => write!(f, "{}", e),
            RequestError::Http(code) => write!(f, "HTTP {}", code),
            RequestError::MissingHeader(name) => write!(f, "missing response header {}", name),
            RequestError::InvalidBody(e) => write!(f, "invalid response body: {}", e),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Curl(e) => Some(e),
            RequestError::InvalidBody(e) => Some(e),
            RequestError::Http(_) | RequestError::MissingHeader(_) => None,
        }
    }
}

impl From<curl::Error> for RequestError {
    fn from(e: curl::Error) -> Self {
        RequestError::Curl(e)
    }
}
