//! Injectable delay between attempts.

use std::time::Duration;

/// Waits out the backoff between two attempts.
pub trait Sleep {
    fn sleep(&self, d: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    fn sleep(&self, d: Duration) {
        std::thread::sleep(d);
    }
}

/// Returns immediately. For tests and zero-backoff runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSleep;

impl Sleep for NoSleep {
    fn sleep(&self, _d: Duration) {}
}
