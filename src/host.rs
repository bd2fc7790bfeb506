//! Trait definitions for accessing the host clock.

use crate::DateResult;

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    /// Returns nanoseconds since the Unix epoch.
    fn get_host_epoch_nanoseconds(&self) -> DateResult<i128>;
}

// A clock that is stopped at the epoch.
impl HostClock for () {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<i128> {
        Ok(0)
    }
}

/// A clock that always reads the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i128);

impl HostClock for FixedClock {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<i128> {
        Ok(self.0)
    }
}
