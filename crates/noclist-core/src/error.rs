//! Stage-level failure returned once a retry budget is spent.

use std::fmt;

use crate::retry::RequestError;

/// Which of the two sequential stages failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AuthToken,
    UserIds,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::AuthToken => write!(f, "auth token"),
            Stage::UserIds => write!(f, "user ids"),
        }
    }
}

/// Error surfaced to the caller of a fetch. Individual failed attempts are
/// logged and retried; only exhaustion reaches this type.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to fetch {stage} after {attempts} attempt(s)")]
    RetriesExhausted {
        stage: Stage,
        attempts: u32,
        #[source]
        last_error: RequestError,
    },
}

impl FetchError {
    pub fn stage(&self) -> Stage {
        match self {
            FetchError::RetriesExhausted { stage, .. } => *stage,
        }
    }
}
