use chrono::{DateTime, Utc};
use tracing::info;

use sosohelper_presence::Activity;
use sosohelper_types::api::{HelperProfileInput, HelperProfileView};
use sosohelper_types::contact::ContactNumber;
use sosohelper_types::models::{HelperProfile, HelperRecord};

use crate::error::ApiError;
use crate::state::AppStateInner;

const MAX_BIO_CHARS: usize = 800;

/// Replace a helper's profile and sealed contact.
///
/// Everything is validated and the contact sealed before the record is
/// touched, so a rejected save leaves it unchanged. A successful save counts
/// as activity.
pub fn save_helper_profile(
    state: &AppStateInner,
    helper: &mut HelperRecord,
    input: HelperProfileInput,
    now: DateTime<Utc>,
) -> Result<HelperProfileView, ApiError> {
    if input.photo_url.trim().is_empty() {
        return Err(ApiError::InvalidInput("photoUrl is required"));
    }
    if input.experience_details.is_empty() {
        return Err(ApiError::InvalidInput("experienceDetails must not be empty"));
    }
    if input.worked_countries.is_empty() {
        return Err(ApiError::InvalidInput("workedCountries must not be empty"));
    }
    if input.personality_traits.is_empty() {
        return Err(ApiError::InvalidInput("personalityTraits must not be empty"));
    }
    let bio = non_blank(input.bio);
    if bio.as_ref().is_some_and(|b| b.chars().count() > MAX_BIO_CHARS) {
        return Err(ApiError::InvalidInput("bio must be at most 800 characters"));
    }

    let contact = ContactNumber::parse(&input.whatsapp)?;
    let sealed = state.cipher.encrypt_string(contact.as_str())?;

    let profile = HelperProfile {
        photo_url: input.photo_url,
        country_of_origin: input.country_of_origin,
        age_range: input.age_range,
        experience_years: input.experience_years,
        experience_details: input.experience_details,
        worked_countries: input.worked_countries,
        family_situation: input.family_situation,
        personality_traits: input.personality_traits,
        contract_end_date: input.contract_end_date,
        available_start_date: input.available_start_date,
        previous_contract_type: input.previous_contract_type,
        bio,
        recommendation_letter_url: non_blank(input.recommendation_letter_url),
        facebook_profile_link: non_blank(input.facebook_profile_link),
        cooking_photos_link: non_blank(input.cooking_photos_link),
        videos_link: non_blank(input.videos_link),
    };
    let view = HelperProfileView::from(&profile);

    helper.profile = Some(profile);
    helper.whatsapp = Some(sealed);
    helper.updated_at = now;
    helper.presence.touch(Activity::ProfileSave, now);

    info!("Helper {} saved profile", helper.id);
    Ok(view)
}

/// A helper's view of their own profile; `None` until one has been saved.
pub fn own_profile(helper: &HelperRecord) -> Option<HelperProfileView> {
    helper.profile.as_ref().map(HelperProfileView::from)
}

/// Treat empty or whitespace-only optional text as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
