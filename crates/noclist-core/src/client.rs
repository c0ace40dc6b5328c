//! Two-stage orchestration: token first, then the user id list.

use crate::auth::{self, AuthToken};
use crate::config::NocConfig;
use crate::error::FetchError;
use crate::http::{CurlTransport, Transport};
use crate::retry::{Sleep, ThreadSleep};
use crate::users::{self, UserIdList};

/// Config, transport and backoff sleeper for one run.
#[derive(Debug, Clone)]
pub struct NocClient<T = CurlTransport, S = ThreadSleep> {
    config: NocConfig,
    transport: T,
    sleeper: S,
}

impl NocClient {
    /// Client over libcurl with real blocking backoff.
    pub fn new(config: NocConfig) -> Self {
        Self::with_parts(config, CurlTransport, ThreadSleep)
    }
}

impl<T: Transport, S: Sleep> NocClient<T, S> {
    pub fn with_parts(config: NocConfig, transport: T, sleeper: S) -> Self {
        Self {
            config,
            transport,
            sleeper,
        }
    }

    pub fn config(&self) -> &NocConfig {
        &self.config
    }

    pub fn fetch_token(&self) -> Result<AuthToken, FetchError> {
        auth::fetch_token(&self.transport, &self.sleeper, &self.config)
    }

    pub fn fetch_user_ids(&self, token: AuthToken) -> Result<UserIdList, FetchError> {
        users::fetch_user_ids(&self.transport, &self.sleeper, &self.config, token)
    }

    /// Fetch the token, then the ids. The users endpoint is only contacted
    /// once a token has been obtained.
    pub fn run(&self) -> Result<UserIdList, FetchError> {
        let token = self.fetch_token()?;
        tracing::info!("auth token acquired");
        let ids = self.fetch_user_ids(token)?;
        tracing::info!(count = ids.len(), "user ids fetched");
        Ok(ids)
    }
}
