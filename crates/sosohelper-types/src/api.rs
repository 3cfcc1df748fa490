use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{
    AgeRange, BookmarkCategory, ContractType, CountryOfOrigin, ExperienceDetail, ExperienceYears,
    FamilySituation, HkArea, HouseSize, JobTask, PersonalityTrait, WeekDay, WorkedCountry,
};
use crate::models::{FamilyComposition, HelperProfile};

// -- Helpers --

/// Profile as the clients see it: dates as `YYYY-MM-DD`, missing optional
/// text as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelperProfileView {
    pub photo_url: String,
    pub country_of_origin: CountryOfOrigin,
    pub age_range: AgeRange,
    pub experience_years: ExperienceYears,
    pub experience_details: Vec<ExperienceDetail>,
    pub worked_countries: Vec<WorkedCountry>,
    pub family_situation: FamilySituation,
    pub personality_traits: Vec<PersonalityTrait>,
    pub contract_end_date: NaiveDate,
    pub available_start_date: NaiveDate,
    pub previous_contract_type: ContractType,
    pub bio: String,
    pub recommendation_letter_url: String,
    pub facebook_profile_link: String,
    pub cooking_photos_link: String,
    pub videos_link: String,
}

impl From<&HelperProfile> for HelperProfileView {
    fn from(profile: &HelperProfile) -> Self {
        Self {
            photo_url: profile.photo_url.clone(),
            country_of_origin: profile.country_of_origin,
            age_range: profile.age_range,
            experience_years: profile.experience_years,
            experience_details: profile.experience_details.clone(),
            worked_countries: profile.worked_countries.clone(),
            family_situation: profile.family_situation,
            personality_traits: profile.personality_traits.clone(),
            contract_end_date: profile.contract_end_date,
            available_start_date: profile.available_start_date,
            previous_contract_type: profile.previous_contract_type,
            bio: profile.bio.clone().unwrap_or_default(),
            recommendation_letter_url: profile.recommendation_letter_url.clone().unwrap_or_default(),
            facebook_profile_link: profile.facebook_profile_link.clone().unwrap_or_default(),
            cooking_photos_link: profile.cooking_photos_link.clone().unwrap_or_default(),
            videos_link: profile.videos_link.clone().unwrap_or_default(),
        }
    }
}

/// A helper as shown to employers: single fetch, search results and bookmarks
/// all use this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelperCard {
    pub id: Uuid,
    pub online: bool,
    /// `None` when there is no contact or it could not be decrypted.
    pub whatsapp: Option<String>,
    pub profile: Option<HelperProfileView>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HelperProfileInput {
    pub photo_url: String,
    pub country_of_origin: CountryOfOrigin,
    pub age_range: AgeRange,
    pub experience_years: ExperienceYears,
    pub experience_details: Vec<ExperienceDetail>,
    pub worked_countries: Vec<WorkedCountry>,
    pub family_situation: FamilySituation,
    pub personality_traits: Vec<PersonalityTrait>,
    pub whatsapp: String,
    pub contract_end_date: NaiveDate,
    pub available_start_date: NaiveDate,
    pub previous_contract_type: ContractType,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub recommendation_letter_url: Option<String>,
    #[serde(default)]
    pub facebook_profile_link: Option<String>,
    #[serde(default)]
    pub cooking_photos_link: Option<String>,
    #[serde(default)]
    pub videos_link: Option<String>,
}

/// Employer-side helper search. Every field narrows the result; list fields
/// require all listed values to be present on the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HelperSearchQuery {
    pub country_of_origin: Option<CountryOfOrigin>,
    pub age_range: Option<AgeRange>,
    pub experience_years: Option<ExperienceYears>,
    pub experience_details: Vec<ExperienceDetail>,
    pub personality_traits: Vec<PersonalityTrait>,
    pub available_from: Option<NaiveDate>,
    pub available_to: Option<NaiveDate>,
    pub online_only: bool,
}

// -- Jobs --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmployerJobInput {
    pub family_composition: FamilyComposition,
    pub location: HkArea,
    pub house_size: HouseSize,
    pub separate_room: bool,
    pub weekly_off_days: Vec<WeekDay>,
    pub tasks: Vec<JobTask>,
    pub whatsapp: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

/// A job posting as shown to helpers, with the employer's contact revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: Uuid,
    pub family_composition: FamilyComposition,
    pub location: HkArea,
    pub house_size: HouseSize,
    pub separate_room: bool,
    pub weekly_off_days: Vec<WeekDay>,
    pub tasks: Vec<JobTask>,
    pub whatsapp: Option<String>,
    pub job_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

// -- Bookmarks --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BookmarkInput {
    pub helper_user_id: Uuid,
    pub category: BookmarkCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkEntry {
    pub employer_id: Uuid,
    pub helper_id: Uuid,
    pub category: BookmarkCategory,
    pub updated_at: DateTime<Utc>,
    pub helper: HelperCard,
}

// -- Presence --

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatResponse {
    pub ok: bool,
    pub ttl_seconds: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> HelperProfile {
        HelperProfile {
            photo_url: "https://img.example/p.jpg".into(),
            country_of_origin: CountryOfOrigin::Philippines,
            age_range: AgeRange::From26To35,
            experience_years: ExperienceYears::From4To5,
            experience_details: vec![ExperienceDetail::Childcare, ExperienceDetail::Cooking],
            worked_countries: vec![WorkedCountry::HongKong],
            family_situation: FamilySituation::Married,
            personality_traits: vec![PersonalityTrait::Patient],
            contract_end_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            available_start_date: NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            previous_contract_type: ContractType::FinishedContract,
            bio: Some("Loves cooking".into()),
            recommendation_letter_url: None,
            facebook_profile_link: None,
            cooking_photos_link: None,
            videos_link: None,
        }
    }

    #[test]
    fn profile_view_wire_shape() {
        let view = HelperProfileView::from(&profile());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["contractEndDate"], "2026-03-31");
        assert_eq!(json["availableStartDate"], "2026-04-15");
        assert_eq!(json["countryOfOrigin"], "Philippines");
        assert_eq!(json["experienceDetails"], serde_json::json!(["Childcare", "Cooking"]));
        assert_eq!(json["bio"], "Loves cooking");
        assert_eq!(json["videosLink"], "");
        assert_eq!(json["recommendationLetterUrl"], "");
    }

    #[test]
    fn search_query_defaults_to_no_filters() {
        let query: HelperSearchQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, HelperSearchQuery::default());
        assert!(!query.online_only);

        let query: HelperSearchQuery = serde_json::from_value(serde_json::json!({
            "countryOfOrigin": "Indonesia",
            "personalityTraits": ["Honest", "Calm"],
            "availableFrom": "2026-05-01",
            "onlineOnly": true
        }))
        .unwrap();
        assert_eq!(query.country_of_origin, Some(CountryOfOrigin::Indonesia));
        assert_eq!(query.personality_traits.len(), 2);
        assert!(query.online_only);
    }

    #[test]
    fn bookmark_input_rejects_unknown_fields() {
        let id = Uuid::new_v4();
        let ok = serde_json::json!({ "helperUserId": id, "category": "Favorite" });
        assert!(serde_json::from_value::<BookmarkInput>(ok).is_ok());

        let extra = serde_json::json!({ "helperUserId": id, "category": "Favorite", "note": "x" });
        assert!(serde_json::from_value::<BookmarkInput>(extra).is_err());
    }
}
