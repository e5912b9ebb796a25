use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::error::{Result, TreeError};


/// One-shot handle to the result of a unit submitted
/// through [`WorkerPool::submit`](super::WorkerPool::submit).
///
/// The result is written once by the unit itself
/// and moved out to the single caller of [`Future::wait`].
#[must_use = "a submitted unit must be waited on to observe its result"]
pub struct Future<T> {
    receiver: Receiver<T>,
}


impl<T> Future<T> {
    #[inline]
    pub(super) fn new(receiver: Receiver<T>) -> Self {
        Self { receiver }
    }


    /// Blocks until the unit completes and returns its result.
    /// Returns [`TreeError::Abandoned`] if the unit panicked
    /// or was dropped by its pool without running.
    #[inline]
    pub fn wait(self) -> Result<T> {
        self.receiver.recv()
            .map_err(|_| TreeError::Abandoned)
    }


    /// Blocks at most `limit` for the unit to complete.
    /// Returns [`TreeError::Stalled`] when the limit expires.
    #[inline]
    pub fn wait_timeout(self, limit: Duration) -> Result<T> {
        self.receiver.recv_timeout(limit)
            .map_err(|e| match e {
                RecvTimeoutError::Timeout => TreeError::Stalled(limit),
                RecvTimeoutError::Disconnected => TreeError::Abandoned,
            })
    }


    /// Waits unconditionally if `limit` is `None`,
    /// otherwise at most `limit`.
    #[inline]
    pub fn wait_for(self, limit: Option<Duration>) -> Result<T> {
        match limit {
            Some(limit) => self.wait_timeout(limit),
            None => self.wait(),
        }
    }
}
