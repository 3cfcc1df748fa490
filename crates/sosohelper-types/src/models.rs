//! Stored record types. Contact fields hold sealed bundles, never plaintext;
//! online status is never stored, only the presence timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sosohelper_presence::PresenceRecord;

use crate::enums::{
    AgeRange, BookmarkCategory, ChildAgeRange, ContractType, CountryOfOrigin, ExperienceDetail,
    ExperienceYears, FamilySituation, HkArea, HouseSize, JobTask, PersonalityTrait, WeekDay,
    WorkedCountry,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelperProfile {
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
    pub bio: Option<String>,
    pub recommendation_letter_url: Option<String>,
    pub facebook_profile_link: Option<String>,
    pub cooking_photos_link: Option<String>,
    pub videos_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelperRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub presence: PresenceRecord,
    /// Sealed WhatsApp bundle.
    pub whatsapp: Option<String>,
    pub profile: Option<HelperProfile>,
    pub updated_at: DateTime<Utc>,
}

impl HelperRecord {
    /// A freshly signed-up helper: no profile, no contact, never seen.
    pub fn new(id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            presence: PresenceRecord::default(),
            whatsapp: None,
            profile: None,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub presence: PresenceRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyComposition {
    pub children_count: u8,
    #[serde(default)]
    pub children_age_ranges: Vec<ChildAgeRange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerJobRecord {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub family_composition: FamilyComposition,
    pub location: HkArea,
    pub house_size: HouseSize,
    pub separate_room: bool,
    pub weekly_off_days: Vec<WeekDay>,
    pub tasks: Vec<JobTask>,
    /// Sealed WhatsApp bundle.
    pub whatsapp: String,
    pub job_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One employer's bookmark of one helper. Unique per (employer, helper).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRecord {
    pub employer_id: Uuid,
    pub helper_id: Uuid,
    pub category: BookmarkCategory,
    pub updated_at: DateTime<Utc>,
}
