//! Fixed vocabularies shared by the web, mobile and mini-program clients.
//! Each variant serializes to the exact label the clients display.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryOfOrigin {
    Philippines,
    Indonesia,
    Thailand,
    #[serde(rename = "Sri Lanka")]
    SriLanka,
    Nepal,
    Vietnam,
    Myanmar,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "18-25")]
    From18To25,
    #[serde(rename = "26-35")]
    From26To35,
    #[serde(rename = "36-45")]
    From36To45,
    #[serde(rename = "46-55")]
    From46To55,
    #[serde(rename = "56+")]
    Over56,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceYears {
    #[serde(rename = "0-1")]
    UpTo1,
    #[serde(rename = "2-3")]
    From2To3,
    #[serde(rename = "4-5")]
    From4To5,
    #[serde(rename = "6-8")]
    From6To8,
    #[serde(rename = "9+")]
    Over9,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceDetail {
    Childcare,
    #[serde(rename = "Elderly care")]
    ElderlyCare,
    Cooking,
    Cleaning,
    Driving,
    Gardening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkedCountry {
    #[serde(rename = "Hong Kong")]
    HongKong,
    Singapore,
    #[serde(rename = "UAE")]
    Uae,
    #[serde(rename = "Saudi Arabia")]
    SaudiArabia,
    Qatar,
    Malaysia,
    Taiwan,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilySituation {
    Single,
    Married,
    #[serde(rename = "Married with children")]
    MarriedWithChildren,
    #[serde(rename = "Single parent")]
    SingleParent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityTrait {
    Friendly,
    Hardworking,
    Patient,
    Honest,
    Calm,
    #[serde(rename = "Good with kids")]
    GoodWithKids,
    #[serde(rename = "Good with elderly")]
    GoodWithElderly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "Finished Contract")]
    FinishedContract,
    #[serde(rename = "Break Contract")]
    BreakContract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HkArea {
    Central,
    Kowloon,
    #[serde(rename = "New Territories")]
    NewTerritories,
    #[serde(rename = "Hong Kong Island")]
    HongKongIsland,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobTask {
    Housework,
    Childcare,
    #[serde(rename = "Elderly care")]
    ElderlyCare,
    Driving,
    Gardening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChildAgeRange {
    #[serde(rename = "0-2")]
    UpTo2,
    #[serde(rename = "3-5")]
    From3To5,
    #[serde(rename = "6-12")]
    From6To12,
    #[serde(rename = "13-17")]
    From13To17,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookmarkCategory {
    Contacted,
    #[serde(rename = "Under Review")]
    UnderReview,
    Favorite,
}
