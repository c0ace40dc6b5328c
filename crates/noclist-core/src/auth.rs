//! Token acquisition from the auth endpoint.

use std::fmt;

use crate::config::NocConfig;
use crate::error::{FetchError, Stage};
use crate::http::Transport;
use crate::retry::{run_with_retry, RequestError, RetryPolicy, Sleep};

/// Opaque credential issued by the auth endpoint. Never persisted; the value
/// is kept out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// GET `{base_url}{auth_path}` until a 200 carries a non-empty token header.
pub fn fetch_token<T, S>(
    transport: &T,
    sleeper: &S,
    config: &NocConfig,
) -> Result<AuthToken, FetchError>
where
    T: Transport + ?Sized,
    S: Sleep + ?Sized,
{
    let policy = RetryPolicy::from(&config.retry);
    let url = config.endpoint(&config.auth_path);

    run_with_retry(&policy, sleeper, Stage::AuthToken, |_attempt| {
        let resp = transport.get(&url, &[])?;
        if resp.status != 200 {
            return Err(RequestError::Http(resp.status));
        }
        match resp.header(&config.token_header) {
            Some(token) if !token.is_empty() => Ok(AuthToken::new(token)),
            _ => Err(RequestError::MissingHeader(config.token_header.clone())),
        }
    })
}
