//! Signed expiration buffer

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Offset applied to "now" when deciding whether an item has expired
///
/// `Early` makes items expire before their timestamp reaches wall-clock time,
/// `Late` after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExpirationBuffer {
    /// Expire exactly at the registered timestamp
    #[default]
    None,
    /// Expire this long before the registered timestamp
    Early(Duration),
    /// Expire this long after the registered timestamp
    Late(Duration),
}

impl ExpirationBuffer {
    /// Build from signed seconds (positive = early, negative = late)
    pub fn from_secs(secs: i64) -> Self {
        match secs.cmp(&0) {
            Ordering::Greater => Self::Early(Duration::from_secs(secs.unsigned_abs())),
            Ordering::Less => Self::Late(Duration::from_secs(secs.unsigned_abs())),
            Ordering::Equal => Self::None,
        }
    }

    /// Build from signed milliseconds (positive = early, negative = late)
    pub fn from_millis(millis: i64) -> Self {
        match millis.cmp(&0) {
            Ordering::Greater => Self::Early(Duration::from_millis(millis.unsigned_abs())),
            Ordering::Less => Self::Late(Duration::from_millis(millis.unsigned_abs())),
            Ordering::Equal => Self::None,
        }
    }

    /// Signed offset in nanoseconds
    pub fn offset_nanos(&self) -> i128 {
        match self {
            Self::None => 0,
            Self::Early(d) => d.as_nanos() as i128,
            Self::Late(d) => -(d.as_nanos() as i128),
        }
    }

    /// Latest expiration timestamp (Unix seconds) that counts as expired at `now`
    ///
    /// Rounds `now + offset` down to a whole second and saturates at the
    /// bounds of `i64`.
    pub fn threshold_unix(&self, now: SystemTime) -> i64 {
        let now_nanos = match now.duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_nanos() as i128,
            Err(err) => -(err.duration().as_nanos() as i128),
        };
        let secs = (now_nanos + self.offset_nanos()).div_euclid(NANOS_PER_SEC);
        i64::try_from(secs).unwrap_or(if secs < 0 { i64::MIN } else { i64::MAX })
    }
}
