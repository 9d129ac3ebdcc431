use serde::{Deserialize, Serialize};

/// Roommate profile with matching-relevant attributes
///
/// `preferred_locations` and `lifestyle_tags` are stored pre-normalized
/// (trimmed, lower-cased, deduplicated); normalization happens once on the
/// save path, never inside the scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoommateProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Monthly budget in a currency-agnostic unit
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(rename = "preferredLocations", default)]
    pub preferred_locations: Vec<String>,
    #[serde(rename = "lifestyleTags", default)]
    pub lifestyle_tags: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "profileImage", default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl RoommateProfile {
    /// Budget as used by the closeness calculation, defaulting to 0
    pub fn budget_or_zero(&self) -> i64 {
        self.budget.unwrap_or(0)
    }
}

/// Compatibility between two profiles
///
/// Ephemeral value, created fresh on every scorer invocation and never
/// persisted. Components are unrounded; `total` is clamped to [0, 10] and
/// rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub location: f64,
    pub budget: f64,
    pub lifestyle: f64,
    pub total: f64,
}

/// A candidate profile paired with its compatibility to the requester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRoommate {
    pub profile: RoommateProfile,
    pub compatibility: CompatibilityScore,
}

/// Predicate filters for the roommate browse pass
#[derive(Debug, Clone, Default)]
pub struct BrowseFilters {
    pub location: Option<String>,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
}

/// Flat/room listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub location: String,
    /// Monthly rent in the same currency-agnostic unit as budgets
    pub rent: i64,
    #[serde(rename = "roomType")]
    pub room_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(rename = "availableFrom", default)]
    pub available_from: Option<chrono::NaiveDate>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "imagePaths", default)]
    pub image_paths: Vec<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_true() -> bool {
    true
}

/// Predicate filters for the listing browse pass
#[derive(Debug, Clone, Default)]
pub struct ListingFilters {
    pub location: Option<String>,
    pub min_rent: Option<i64>,
    pub max_rent: Option<i64>,
    pub room_type: Option<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub location: f64,
    pub budget: f64,
    pub lifestyle: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 5.0,
            budget: 3.0,
            lifestyle: 2.0,
        }
    }
}
