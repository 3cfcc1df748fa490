use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

use sosohelper_api::bookmarks::{BookmarkSet, list_bookmarks, upsert_bookmark};
use sosohelper_api::helpers::{helper_card, search_helpers};
use sosohelper_api::jobs::{list_jobs, post_job};
use sosohelper_api::profile::save_helper_profile;
use sosohelper_api::{AppState, AppStateInner, Settings};
use sosohelper_crypto::{CipherError, ContactCipher, ContactKey};
use sosohelper_presence::OnlineTtl;
use sosohelper_types::api::{
    BookmarkInput, EmployerJobInput, HelperProfileInput, HelperSearchQuery,
};
use sosohelper_types::enums::{
    AgeRange, BookmarkCategory, ContractType, CountryOfOrigin, ExperienceDetail, ExperienceYears,
    FamilySituation, HkArea, HouseSize, JobTask, PersonalityTrait, WeekDay, WorkedCountry,
};
use sosohelper_types::models::{FamilyComposition, HelperRecord};

const PHONE: &str = "+85291234567";

fn state_with(key: &ContactKey) -> AppState {
    AppStateInner::new(ContactCipher::new(key), OnlineTtl::DEFAULT)
}

fn profile_input() -> HelperProfileInput {
    HelperProfileInput {
        photo_url: "https://img.example/helper.jpg".into(),
        country_of_origin: CountryOfOrigin::Indonesia,
        age_range: AgeRange::From26To35,
        experience_years: ExperienceYears::From6To8,
        experience_details: vec![ExperienceDetail::ElderlyCare],
        worked_countries: vec![WorkedCountry::HongKong, WorkedCountry::Taiwan],
        family_situation: FamilySituation::MarriedWithChildren,
        personality_traits: vec![PersonalityTrait::Patient, PersonalityTrait::GoodWithElderly],
        whatsapp: PHONE.into(),
        contract_end_date: NaiveDate::from_ymd_opt(2026, 11, 30).unwrap(),
        available_start_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
        previous_contract_type: ContractType::FinishedContract,
        bio: Some("Eight years caring for elderly employers".into()),
        recommendation_letter_url: None,
        facebook_profile_link: None,
        cooking_photos_link: None,
        videos_link: None,
    }
}

/// A helper whose profile was saved `seen_secs_ago` before `now`.
fn saved_helper(state: &AppStateInner, now: DateTime<Utc>, seen_secs_ago: i64) -> HelperRecord {
    let saved_at = now - Duration::seconds(seen_secs_ago);
    let mut helper = HelperRecord::new(Uuid::new_v4(), saved_at);
    save_helper_profile(state, &mut helper, profile_input(), saved_at).unwrap();
    helper
}

/// Single fetch, search and bookmark listing for one helper, in that order.
fn online_on_every_path(
    state: &AppStateInner,
    helper: &HelperRecord,
    now: DateTime<Utc>,
) -> (bool, bool, bool) {
    let helpers = HashMap::from([(helper.id, helper.clone())]);
    let employer = Uuid::new_v4();
    let mut bookmarks = BookmarkSet::new();
    upsert_bookmark(
        &mut bookmarks,
        &helpers,
        employer,
        BookmarkInput {
            helper_user_id: helper.id,
            category: BookmarkCategory::Favorite,
        },
        now,
    )
    .unwrap();

    let single = helper_card(state, helper, now).online;
    let searched = search_helpers(state, [helper], &HelperSearchQuery::default(), now);
    let listed = list_bookmarks(state, &bookmarks, &helpers, employer, now);

    assert_eq!(searched.len(), 1);
    assert_eq!(listed.len(), 1);
    (single, searched[0].online, listed[0].helper.online)
}

#[test]
fn online_label_agrees_across_read_paths() {
    let state = state_with(&ContactKey::generate());
    let now = Utc::now();

    for (seen_secs_ago, expected) in [(0, true), (60, true), (180, true), (181, false), (3_600, false)] {
        let helper = saved_helper(&state, now, seen_secs_ago);
        assert_eq!(
            online_on_every_path(&state, &helper, now),
            (expected, expected, expected),
            "last active {}s ago",
            seen_secs_ago
        );
    }
}

#[test]
fn online_only_search_matches_single_fetch() {
    let state = state_with(&ContactKey::generate());
    let now = Utc::now();
    let helpers: Vec<HelperRecord> = [5, 179, 180, 181, 900]
        .into_iter()
        .map(|ago| saved_helper(&state, now, ago))
        .collect();

    let query = HelperSearchQuery {
        online_only: true,
        ..Default::default()
    };
    let mut found: Vec<Uuid> = search_helpers(&state, &helpers, &query, now)
        .into_iter()
        .map(|c| c.id)
        .collect();
    let mut online: Vec<Uuid> = helpers
        .iter()
        .filter(|h| helper_card(&state, h, now).online)
        .map(|h| h.id)
        .collect();

    found.sort();
    online.sort();
    assert_eq!(found.len(), 3);
    assert_eq!(found, online);
}

#[test]
fn contact_survives_storage_with_same_key() {
    let key = ContactKey::generate();
    let writer = state_with(&key);
    let now = Utc::now();
    let helper = saved_helper(&writer, now, 0);

    let stored = helper.whatsapp.clone().unwrap();
    assert_eq!(stored.split('.').count(), 3);
    assert!(!stored.contains(PHONE));

    // a restart with the same key must still open it
    let reader = state_with(&ContactKey::from_secret(&key.to_base64()).unwrap());
    assert_eq!(helper_card(&reader, &helper, now).whatsapp.as_deref(), Some(PHONE));
}

#[test]
fn contact_under_rotated_key_is_hidden_not_fatal() {
    let writer = state_with(&ContactKey::generate());
    let reader = state_with(&ContactKey::generate());
    let now = Utc::now();
    let helper = saved_helper(&writer, now, 10);

    let stored = helper.whatsapp.as_deref().unwrap();
    assert_eq!(
        reader.cipher.decrypt_string(stored),
        Err(CipherError::Authentication)
    );

    let card = helper_card(&reader, &helper, now);
    assert_eq!(card.whatsapp, None);
    assert!(card.online);
    assert!(card.profile.is_some());
}

#[test]
fn corrupt_contacts_degrade_on_every_read_path() {
    let state = state_with(&ContactKey::generate());
    let now = Utc::now();

    for corrupt in ["abc.def", "plain +85291234567", "a.b.c", ""] {
        let mut helper = saved_helper(&state, now, 30);
        helper.whatsapp = Some(corrupt.to_string());

        assert_eq!(helper_card(&state, &helper, now).whatsapp, None, "{:?}", corrupt);

        let searched = search_helpers(&state, [&helper], &HelperSearchQuery::default(), now);
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].whatsapp, None);

        let helpers = HashMap::from([(helper.id, helper.clone())]);
        let employer = Uuid::new_v4();
        let mut bookmarks = BookmarkSet::new();
        upsert_bookmark(
            &mut bookmarks,
            &helpers,
            employer,
            BookmarkInput {
                helper_user_id: helper.id,
                category: BookmarkCategory::UnderReview,
            },
            now,
        )
        .unwrap();
        let listed = list_bookmarks(&state, &bookmarks, &helpers, employer, now);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].helper.whatsapp, None);
    }

    let mut job = post_job(
        &state,
        Uuid::new_v4(),
        EmployerJobInput {
            family_composition: FamilyComposition {
                children_count: 0,
                children_age_ranges: vec![],
            },
            location: HkArea::NewTerritories,
            house_size: HouseSize::Large,
            separate_room: false,
            weekly_off_days: vec![WeekDay::Saturday, WeekDay::Sunday],
            tasks: vec![JobTask::ElderlyCare],
            whatsapp: PHONE.into(),
            job_description: None,
        },
        now,
    )
    .unwrap();
    job.whatsapp = "abc.def".into();
    let listed = list_jobs(&state, [&job]);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].whatsapp, None);
}

#[test]
fn settings_to_state_end_to_end() {
    let secret = ContactKey::generate().to_base64();
    let settings = Settings::from_lookup(|name: &str| match name {
        "DATA_ENCRYPTION_KEY" => Some(secret.clone()),
        "ONLINE_TTL_SECONDS" => Some("60".into()),
        _ => None,
    })
    .unwrap();
    let state = AppStateInner::from_settings(&settings).unwrap();
    let now = Utc::now();

    let helper = saved_helper(&state, now, 61);
    let card = helper_card(&state, &helper, now);
    assert!(!card.online);
    assert_eq!(card.whatsapp.as_deref(), Some(PHONE));
}
