//! Label HTTP status and curl errors for logging.

use super::error::RequestError;

/// High-level classification of a failed attempt.
///
/// Does not influence the retry decision: all kinds are retried until the
/// budget runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Network-level failure (connection refused/reset, DNS, etc.).
    Connection,
    /// Server answered with a status other than 200.
    Status(u16),
    /// 200 response that could not be used (missing header, bad body).
    Malformed,
    /// Any other curl error.
    Other,
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Classify a failed attempt into an ErrorKind.
pub fn classify(e: &RequestError) -> ErrorKind {
    match e {
        RequestError::Curl(ce) => classify_curl_error(ce),
        RequestError::Http(code) => ErrorKind::Status(u16::try_from(*code).unwrap_or(u16::MAX)),
        RequestError::MissingHeader(_) | RequestError::InvalidBody(_) => ErrorKind::Malformed,
    }
}
