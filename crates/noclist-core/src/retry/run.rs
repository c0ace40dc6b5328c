//! Retry loop: run a closure until success or the budget is spent.

use super::classify;
use super::error::RequestError;
use super::policy::{RetryDecision, RetryPolicy};
use super::sleep::Sleep;
use crate::error::{FetchError, Stage};

/// Runs `f` (given the 1-based attempt number) until it succeeds or the
/// policy says to stop. Each failure is logged as a warning; on retry the
/// sleeper waits for the backoff first.
pub fn run_with_retry<T, F, S>(
    policy: &RetryPolicy,
    sleeper: &S,
    stage: Stage,
    mut f: F,
) -> Result<T, FetchError>
where
    F: FnMut(u32) -> Result<T, RequestError>,
    S: Sleep + ?Sized,
{
    let mut attempt = 1u32;
    loop {
        match f(attempt) {
            Ok(v) => {
                tracing::debug!(%stage, attempt, "request succeeded");
                return Ok(v);
            }
            Err(e) => {
                let kind = classify::classify(&e);
                tracing::warn!(
                    %stage,
                    attempt,
                    max_attempts = policy.max_attempts,
                    ?kind,
                    error = %e,
                    "request attempt failed"
                );
                match policy.decide(attempt) {
                    RetryDecision::NoRetry => {
                        return Err(FetchError::RetriesExhausted {
                            stage,
                            attempts: attempt,
                            last_error: e,
                        })
                    }
                    RetryDecision::RetryAfter(d) => {
                        sleeper.sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}
