//! Retry and backoff policy.
//!
//! A stage gets a fixed attempt budget with a uniform delay between attempts.
//! Every failed attempt is retried the same way regardless of its cause; the
//! classification below only labels log events.

mod classify;
mod error;
mod policy;
mod run;
mod sleep;
#[cfg(test)]
pub(crate) mod testing;

pub use classify::{classify, classify_curl_error, ErrorKind};
pub use error::RequestError;
pub use policy::{RetryDecision, RetryPolicy};
pub use run::run_with_retry;
pub use sleep::{NoSleep, Sleep, ThreadSleep};
