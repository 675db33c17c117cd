use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Identifies one repeating timer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("timer service unavailable: {0}")]
    Unavailable(String),
    #[error("timer registration rejected: {0}")]
    Rejected(String),
}

/// Host-provided repeating timer.
///
/// After `register` returns an id, the host calls back into the widget with
/// that id every `interval` until `cancel` is called. Cancellation is
/// synchronous: once `cancel` returns, the id is dead even if a tick for it
/// is still queued on the host side.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait TimerService {
    fn register(&mut self, interval: Duration) -> Result<TimerId, TimerError>;

    fn cancel(&mut self, id: TimerId);
}
