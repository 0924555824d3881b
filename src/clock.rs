//! Monotonic high-resolution time source.
//!
//! All span and trace timestamps in this crate are ticks from this clock. The
//! reading is anchored to the first call in the process, so values are only
//! comparable within one process lifetime — which is all the recording model
//! needs, since a trace never outlives the process that produced it.

use std::sync::OnceLock;
use std::time::Instant;

use crate::error::{Error, Result};

static ANCHOR: OnceLock<Instant> = OnceLock::new();

/// Returns a monotonically non-decreasing timestamp in nanoseconds.
///
/// Fails with [`Error::UnavailableClock`] only when the platform reading
/// cannot be represented; callers should treat that as fatal at startup, since
/// every timing in the agent is meaningless without a working clock.
pub fn high_res_time() -> Result<u64> {
    let anchor = ANCHOR.get_or_init(Instant::now);
    u64::try_from(anchor.elapsed().as_nanos()).map_err(|_| Error::UnavailableClock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_never_decrease() {
        let mut previous = high_res_time().expect("clock available");
        for _ in 0..1000 {
            let next = high_res_time().expect("clock available");
            assert!(next >= previous);
            previous = next;
        }
    }
}
