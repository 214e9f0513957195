//! Wall-clock source used by the pruner

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time
///
/// Swap in [`ManualClock`] to drive expiration deterministically.
pub trait Clock: Send + Sync + 'static {
    /// Current wall-clock time
    fn now(&self) -> SystemTime;
}

/// System wall clock (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Manually driven clock
///
/// Cloning creates a new handle to the SAME time value.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<SystemTime>>,
}

impl ManualClock {
    /// Create a clock frozen at `now`
    pub fn new(now: SystemTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Create a clock frozen at the given Unix second
    ///
    /// Falls back to the Unix epoch if `SystemTime` cannot represent `secs`.
    pub fn at_unix(secs: i64) -> Self {
        let offset = Duration::from_secs(secs.unsigned_abs());
        let now = if secs >= 0 {
            UNIX_EPOCH.checked_add(offset)
        } else {
            UNIX_EPOCH.checked_sub(offset)
        };
        Self::new(now.unwrap_or(UNIX_EPOCH))
    }

    /// Set the clock to `now`
    pub fn set(&self, now: SystemTime) {
        *self.now.lock() = now;
    }

    /// Move the clock forward, unless that leaves `SystemTime`'s range
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        if let Some(next) = now.checked_add(by) {
            *now = next;
        }
    }

    /// Move the clock backward, unless that leaves `SystemTime`'s range
    pub fn rewind(&self, by: Duration) {
        let mut now = self.now.lock();
        if let Some(next) = now.checked_sub(by) {
            *now = next;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(SystemTime::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        *self.now.lock()
    }
}
