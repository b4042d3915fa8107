//! Wall clock backing session expiry.

use application::ports::outbound::Clock;
use chrono::Utc;

/// Current Unix time, in seconds, from the host clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // A host clock set before 1970 reads as the epoch.
        u64::try_from(Utc::now().timestamp()).unwrap_or_default()
    }
}
