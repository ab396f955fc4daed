//! Double-submission guard for mutations.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Operation, SyncError};

/// Holds the view's in-flight flag until dropped.
#[derive(Debug)]
pub(crate) struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    /// Claim the flag, or fail with [`SyncError::InFlight`] if it is taken.
    pub(crate) fn acquire(flag: &'a AtomicBool, op: Operation) -> Result<Self, SyncError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self { flag })
            .map_err(|_| SyncError::InFlight { op })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
