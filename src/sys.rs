use num_traits::ToPrimitive;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::{host::HostClock, DateError, DateResult};

/// The host system clock.
///
/// This implementation is backed by [`std::time::SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<i128> {
        get_system_nanoseconds()
    }
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> DateResult<i128> {
    let out_of_range = || DateError::assert().with_message("Error fetching system time");
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos().to_i128().ok_or_else(out_of_range),
        // The clock is set before the epoch.
        Err(err) => err
            .duration()
            .as_nanos()
            .to_i128()
            .map(|ns| -ns)
            .ok_or_else(out_of_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        let ns = SystemClock.get_host_epoch_nanoseconds().unwrap();
        assert!(ns > 1_577_836_800_000_000_000);
    }
}
