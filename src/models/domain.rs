use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recommendable profile as served by the profile API.
///
/// Profiles are read-only here: the service never creates or mutates them,
/// and within one recommendation request a profile is an immutable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "profileId")]
    pub profile_id: Uuid,
    #[serde(rename = "accountId")]
    pub account_id: Uuid,
    #[serde(rename = "imagePaths", default)]
    pub image_paths: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub gender: Gender,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: chrono::NaiveDate,
    #[serde(rename = "bookInterest", default)]
    pub book_interest: Option<BookInterest>,
    #[serde(rename = "sportInterest", default)]
    pub sport_interest: Option<SportInterest>,
    #[serde(rename = "movieInterest", default)]
    pub movie_interest: Option<MovieInterest>,
    #[serde(rename = "musicInterest", default)]
    pub music_interest: Option<MusicInterest>,
    #[serde(rename = "foodInterest", default)]
    pub food_interest: Option<FoodInterest>,
    #[serde(rename = "lifestyleInterest", default)]
    pub lifestyle_interest: Option<LifestyleInterest>,
    #[serde(rename = "travelInterest", default)]
    pub travel_interest: Option<TravelInterest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookInterest {
    Fantasy,
    SciFi,
    Mystery,
    Romance,
    Classics,
    NonFiction,
    Poetry,
    Thriller,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SportInterest {
    Football,
    Basketball,
    Tennis,
    Swimming,
    Running,
    Yoga,
    Cycling,
    Climbing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieInterest {
    Action,
    Comedy,
    Drama,
    Horror,
    SciFi,
    Documentary,
    Romance,
    Thriller,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MusicInterest {
    Rock,
    Pop,
    HipHop,
    Jazz,
    Classical,
    Electronic,
    Country,
    Metal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodInterest {
    Italian,
    Japanese,
    Mexican,
    Indian,
    Vegan,
    Seafood,
    Barbecue,
    Desserts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleInterest {
    ActiveLifestyle,
    Homebody,
    NightOwl,
    EarlyBird,
    CareerDriven,
    FamilyOriented,
    SocialButterfly,
    Minimalist,
    Adventurous,
    CreativeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelInterest {
    Beach,
    Mountains,
    CityBreaks,
    RoadTrips,
    Backpacking,
    Camping,
    Cruises,
    CulturalTours,
}

/// Kind of interaction a user records against another user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Like,
    Dislike,
}

/// A candidate paired with its interest match score. Only exists while one
/// request is being ranked.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub profile: Profile,
    pub score: u32,
}
