use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use sosohelper_presence::{Activity, PresenceRecord};
use sosohelper_types::api::HeartbeatResponse;

use crate::state::AppStateInner;

/// Record a client heartbeat and tell the client how long it stays online
/// without another one.
pub fn heartbeat(
    state: &AppStateInner,
    actor_id: Uuid,
    presence: &mut PresenceRecord,
    now: DateTime<Utc>,
) -> HeartbeatResponse {
    presence.touch(Activity::Heartbeat, now);
    debug!("Heartbeat from {}", actor_id);

    HeartbeatResponse {
        ok: true,
        ttl_seconds: state.online_ttl.as_secs(),
    }
}

/// Authenticating on the realtime channel counts as activity.
pub fn gateway_authenticated(actor_id: Uuid, presence: &mut PresenceRecord, now: DateTime<Utc>) {
    presence.touch(Activity::GatewayAuth, now);
    debug!("Actor {} authenticated on realtime channel", actor_id);
}
