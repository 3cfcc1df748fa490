use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::{is_online, is_online_at};
use crate::ttl::OnlineTtl;

/// What bumped an actor's last-active timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// Explicit heartbeat from a client.
    Heartbeat,
    /// Successful authentication on the realtime channel.
    GatewayAuth,
    /// The actor saved their profile.
    ProfileSave,
}

/// Presence state stored on a helper or employer record.
///
/// Only the timestamp is kept; "online" is always derived from it at read
/// time and never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRecord {
    pub last_active: Option<DateTime<Utc>>,
}

impl PresenceRecord {
    pub fn seen_at(at: DateTime<Utc>) -> Self {
        Self {
            last_active: Some(at),
        }
    }

    pub fn touch(&mut self, activity: Activity, now: DateTime<Utc>) {
        debug!("Presence touched by {:?} at {}", activity, now);
        self.last_active = Some(now);
    }

    pub fn is_online(&self, ttl: OnlineTtl) -> bool {
        is_online(self.last_active, ttl)
    }

    pub fn is_online_at(&self, ttl: OnlineTtl, now: DateTime<Utc>) -> bool {
        is_online_at(self.last_active, ttl, now)
    }

    /// Filter form of the online check: active at or after `cutoff`.
    pub fn active_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_active.is_some_and(|seen| seen >= cutoff)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn touch_records_activity_time() {
        let now = Utc::now();
        let mut record = PresenceRecord::default();
        assert!(!record.is_online_at(OnlineTtl::DEFAULT, now));

        record.touch(Activity::Heartbeat, now);
        assert_eq!(record.last_active, Some(now));
        assert!(record.is_online_at(OnlineTtl::DEFAULT, now));
        assert!(record.is_online(OnlineTtl::DEFAULT));
    }

    #[test]
    fn every_activity_refreshes_timestamp() {
        let start = Utc::now() - Duration::hours(2);
        let mut record = PresenceRecord::seen_at(start);

        for (i, activity) in [Activity::Heartbeat, Activity::GatewayAuth, Activity::ProfileSave]
            .into_iter()
            .enumerate()
        {
            let at = start + Duration::minutes(10 * (i as i64 + 1));
            record.touch(activity, at);
            assert_eq!(record.last_active, Some(at));
        }
    }

    #[test]
    fn active_since_matches_evaluation() {
        let now = Utc::now();
        let ttl = OnlineTtl::DEFAULT;
        let cutoff = ttl.cutoff(now);

        let fresh = PresenceRecord::seen_at(now - Duration::seconds(30));
        let stale = PresenceRecord::seen_at(now - Duration::seconds(181));
        let never = PresenceRecord::default();

        for record in [fresh, stale, never] {
            assert_eq!(record.active_since(cutoff), record.is_online_at(ttl, now));
        }
    }

    #[test]
    fn serializes_camel_case_timestamp() {
        let json = serde_json::to_value(PresenceRecord::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "lastActive": null }));
    }
}
