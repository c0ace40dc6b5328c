//! Checksum-authenticated retrieval of the user id list.

use serde::{Deserialize, Serialize};

use crate::auth::AuthToken;
use crate::checksum::request_checksum;
use crate::config::NocConfig;
use crate::error::{FetchError, Stage};
use crate::http::Transport;
use crate::retry::{run_with_retry, RequestError, RetryPolicy, Sleep};

/// User ids in server order; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdList(Vec<String>);

impl UserIdList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for UserIdList {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

/// Split a users response body into ids: surrounding whitespace is dropped,
/// then one id per `\n` line (a trailing `\r` is stripped). Empty body gives
/// an empty list.
pub fn parse_user_ids(body: &str) -> UserIdList {
    let body = body.trim();
    if body.is_empty() {
        return UserIdList::default();
    }
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect::<Vec<_>>()
        .into()
}

/// GET `{base_url}{users_path}` with the checksum header until a 200 arrives.
///
/// Takes the token by value: there is no way to reach this stage without one.
pub fn fetch_user_ids<T, S>(
    transport: &T,
    sleeper: &S,
    config: &NocConfig,
    token: AuthToken,
) -> Result<UserIdList, FetchError>
where
    T: Transport + ?Sized,
    S: Sleep + ?Sized,
{
    let policy = RetryPolicy::from(&config.retry);
    let url = config.endpoint(&config.users_path);
    // Token and path are fixed for the whole stage.
    let checksum = request_checksum(token.as_str(), &config.users_path);
    let headers = [(config.checksum_header.as_str(), checksum.as_str())];

    run_with_retry(&policy, sleeper, Stage::UserIds, |_attempt| {
        let resp = transport.get(&url, &headers)?;
        if resp.status != 200 {
            return Err(RequestError::Http(resp.status));
        }
        let body = String::from_utf8(resp.body).map_err(RequestError::InvalidBody)?;
        Ok(parse_user_ids(&body))
    })
}
