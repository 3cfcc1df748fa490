use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use sosohelper_types::api::{BookmarkEntry, BookmarkInput};
use sosohelper_types::models::{BookmarkRecord, HelperRecord};

use crate::error::ApiError;
use crate::helpers::helper_card;
use crate::state::AppStateInner;

/// Bookmarks keyed by (employer, helper); an employer bookmarks a helper at
/// most once, and re-bookmarking only changes the category.
#[derive(Debug, Default)]
pub struct BookmarkSet {
    entries: HashMap<(Uuid, Uuid), BookmarkRecord>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, employer_id: Uuid, helper_id: Uuid) -> Option<&BookmarkRecord> {
        self.entries.get(&(employer_id, helper_id))
    }

    pub fn for_employer(&self, employer_id: Uuid) -> impl Iterator<Item = &BookmarkRecord> {
        self.entries
            .values()
            .filter(move |b| b.employer_id == employer_id)
    }
}

/// Create or re-categorize a bookmark. The helper must exist.
pub fn upsert_bookmark(
    bookmarks: &mut BookmarkSet,
    helpers: &HashMap<Uuid, HelperRecord>,
    employer_id: Uuid,
    input: BookmarkInput,
    now: DateTime<Utc>,
) -> Result<BookmarkRecord, ApiError> {
    if !helpers.contains_key(&input.helper_user_id) {
        return Err(ApiError::HelperNotFound);
    }

    let record = BookmarkRecord {
        employer_id,
        helper_id: input.helper_user_id,
        category: input.category,
        updated_at: now,
    };
    bookmarks
        .entries
        .insert((employer_id, input.helper_user_id), record.clone());

    debug!(
        "Employer {} bookmarked helper {} as {:?}",
        employer_id, input.helper_user_id, input.category
    );
    Ok(record)
}

pub fn remove_bookmark(
    bookmarks: &mut BookmarkSet,
    employer_id: Uuid,
    helper_id: Uuid,
) -> Result<(), ApiError> {
    bookmarks
        .entries
        .remove(&(employer_id, helper_id))
        .map(|_| ())
        .ok_or(ApiError::BookmarkNotFound)
}

/// An employer's bookmarks, most recently updated first.
///
/// Bookmarks whose helper is gone or has no profile are left out. Each helper
/// is rendered with [`helper_card`], so online status and contact match what
/// search and single fetch show.
pub fn list_bookmarks(
    state: &AppStateInner,
    bookmarks: &BookmarkSet,
    helpers: &HashMap<Uuid, HelperRecord>,
    employer_id: Uuid,
    now: DateTime<Utc>,
) -> Vec<BookmarkEntry> {
    let mut rows: Vec<&BookmarkRecord> = bookmarks.for_employer(employer_id).collect();
    rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    rows.into_iter()
        .filter_map(|b| {
            let helper = helpers.get(&b.helper_id)?;
            helper.profile.as_ref()?;
            Some(BookmarkEntry {
                employer_id: b.employer_id,
                helper_id: b.helper_id,
                category: b.category,
                updated_at: b.updated_at,
                helper: helper_card(state, helper, now),
            })
        })
        .collect()
}
