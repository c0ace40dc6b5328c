//! Blocking HTTP GET behind a small trait so fetch logic can run against a
//! scripted transport in tests.
//!
//! The production transport uses the curl crate (libcurl easy interface).

mod easy;
mod parse;
#[cfg(test)]
pub(crate) mod testing;

pub use easy::CurlTransport;
pub use parse::header_value;

use crate::retry::RequestError;

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u32,
    /// Raw header lines of the final response (status line included).
    pub headers: Vec<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Case-insensitive lookup of a response header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, name)
    }
}

/// Issues one GET request. Only transport failures are errors; any HTTP
/// status comes back as `Ok`.
pub trait Transport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, RequestError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, RequestError> {
        (**self).get(url, headers)
    }
}
