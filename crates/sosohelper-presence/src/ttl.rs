use std::fmt;
use std::num::NonZeroU32;

use chrono::{DateTime, Duration, Utc};

/// How long after its last recorded activity an actor still counts as online.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OnlineTtl(NonZeroU32);

impl OnlineTtl {
    /// Three minutes, the deployed default for `ONLINE_TTL_SECONDS`.
    pub const DEFAULT: OnlineTtl = match NonZeroU32::new(180) {
        Some(secs) => OnlineTtl(secs),
        None => panic!("default ttl must be positive"),
    };

    /// Returns `None` for zero, which would make every actor offline.
    pub fn from_secs(secs: u32) -> Option<Self> {
        NonZeroU32::new(secs).map(Self)
    }

    pub fn as_secs(self) -> u32 {
        self.0.get()
    }

    pub fn window(self) -> Duration {
        Duration::seconds(i64::from(self.as_secs()))
    }

    /// Oldest `last_active` that is still online at `now`.
    ///
    /// `last_active >= ttl.cutoff(now)` holds exactly when
    /// [`is_online_at`](crate::is_online_at) returns true, so list filters
    /// built on the cutoff agree with per-record evaluation.
    pub fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(self.window())
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl Default for OnlineTtl {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for OnlineTtl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.as_secs())
    }
}
