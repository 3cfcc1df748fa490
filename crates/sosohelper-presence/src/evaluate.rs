use chrono::{DateTime, Utc};

use crate::ttl::OnlineTtl;

/// Whether an actor last seen at `last_active` is online right now.
///
/// Reads the wall clock, so two calls near the boundary may disagree.
pub fn is_online(last_active: Option<DateTime<Utc>>, ttl: OnlineTtl) -> bool {
    is_online_at(last_active, ttl, Utc::now())
}

/// Whether an actor last seen at `last_active` is online at `now`.
///
/// The boundary is inclusive, and a timestamp ahead of `now` (clock skew)
/// counts as online. An actor with no recorded activity is offline.
pub fn is_online_at(last_active: Option<DateTime<Utc>>, ttl: OnlineTtl, now: DateTime<Utc>) -> bool {
    match last_active {
        Some(seen) => now.signed_duration_since(seen) <= ttl.window(),
        None => false,
    }
}
