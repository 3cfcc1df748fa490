//! Online-status evaluation.
//!
//! An actor is online while their last recorded activity is no older than a
//! configured TTL. Nothing sweeps stale actors; every read recomputes the
//! flag from the stored timestamp.

pub mod evaluate;
pub mod record;
pub mod ttl;

pub use evaluate::{is_online, is_online_at};
pub use record::{Activity, PresenceRecord};
pub use ttl::OnlineTtl;
