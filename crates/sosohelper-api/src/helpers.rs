use chrono::{DateTime, Utc};
use tracing::debug;

use sosohelper_types::api::{HelperCard, HelperProfileView, HelperSearchQuery};
use sosohelper_types::models::HelperRecord;

use crate::state::AppStateInner;

/// Search never returns more than this many helpers.
pub const SEARCH_LIMIT: usize = 100;

/// Render one helper for an employer.
///
/// Online status and contact are derived the same way on every read path;
/// search and bookmark listings go through here too.
pub fn helper_card(state: &AppStateInner, helper: &HelperRecord, now: DateTime<Utc>) -> HelperCard {
    HelperCard {
        id: helper.id,
        online: helper.presence.is_online_at(state.online_ttl, now),
        whatsapp: state.cipher.reveal(helper.whatsapp.as_deref()),
        profile: helper.profile.as_ref().map(HelperProfileView::from),
    }
}

/// Filter, rank and render helpers for an employer's search.
///
/// Helpers without a profile never match. Results are ordered online first,
/// then by most recent activity (never-seen last), then by most recent
/// profile update, and capped at [`SEARCH_LIMIT`].
pub fn search_helpers<'a, I>(
    state: &AppStateInner,
    helpers: I,
    query: &HelperSearchQuery,
    now: DateTime<Utc>,
) -> Vec<HelperCard>
where
    I: IntoIterator<Item = &'a HelperRecord>,
{
    let cutoff = state.online_ttl.cutoff(now);

    let mut scanned = 0usize;
    let mut matched: Vec<&HelperRecord> = helpers
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter(|h| matches_query(h, query, cutoff))
        .collect();

    matched.sort_by(|a, b| {
        let a_online = a.presence.active_since(cutoff);
        let b_online = b.presence.active_since(cutoff);
        b_online
            .cmp(&a_online)
            .then_with(|| b.presence.last_active.cmp(&a.presence.last_active))
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });

    debug!("Helper search matched {} of {} helpers", matched.len(), scanned);

    matched
        .into_iter()
        .take(SEARCH_LIMIT)
        .map(|h| helper_card(state, h, now))
        .collect()
}

/// `cutoff` is the TTL cutoff for `online_only`; the stored timestamp is the
/// only online signal, same as in [`helper_card`].
fn matches_query(helper: &HelperRecord, query: &HelperSearchQuery, cutoff: DateTime<Utc>) -> bool {
    let Some(profile) = &helper.profile else {
        return false;
    };

    if query.online_only && !helper.presence.active_since(cutoff) {
        return false;
    }

    query
        .country_of_origin
        .is_none_or(|c| c == profile.country_of_origin)
        && query.age_range.is_none_or(|a| a == profile.age_range)
        && query
            .experience_years
            .is_none_or(|y| y == profile.experience_years)
        && query
            .experience_details
            .iter()
            .all(|d| profile.experience_details.contains(d))
        && query
            .personality_traits
            .iter()
            .all(|t| profile.personality_traits.contains(t))
        && query
            .available_from
            .is_none_or(|from| profile.available_start_date >= from)
        && query
            .available_to
            .is_none_or(|to| profile.available_start_date <= to)
}
