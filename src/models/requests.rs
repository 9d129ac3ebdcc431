use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to browse roommates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BrowseRoommatesRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "budget_min", rename = "budgetMin")]
    pub budget_min: Option<i64>,
    #[serde(default, alias = "budget_max", rename = "budgetMax")]
    pub budget_max: Option<i64>,
}

/// Query parameters for the roommate detail view
#[derive(Debug, Clone, Deserialize)]
pub struct RoommateDetailQuery {
    #[serde(default, alias = "user_id", rename = "userId")]
    pub user_id: Option<i64>,
}

/// Query parameters for listing browse
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseListingsQuery {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "min_rent", rename = "minRent")]
    pub min_rent: Option<i64>,
    #[serde(default, alias = "max_rent", rename = "maxRent")]
    pub max_rent: Option<i64>,
    #[serde(default, alias = "room_type", rename = "roomType")]
    pub room_type: Option<String>,
}

/// Request to create a flat/room listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateListingRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 100))]
    pub location: String,
    #[validate(range(min = 0))]
    pub rent: i64,
    #[validate(length(min = 1, max = 50))]
    #[serde(alias = "room_type", rename = "roomType")]
    pub room_type: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Comma-separated amenities, split on save
    #[serde(default)]
    pub amenities: String,
    #[serde(default, alias = "available_from", rename = "availableFrom")]
    pub available_from: Option<chrono::NaiveDate>,
    #[serde(default, alias = "image_paths", rename = "imagePaths")]
    pub image_paths: Vec<String>,
}

/// Request to save a roommate profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<String>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub budget: Option<i64>,
    /// Comma-separated preferred locations, normalized on save
    #[serde(default, alias = "preferred_locations", rename = "preferredLocations")]
    pub preferred_locations: String,
    /// Comma-separated lifestyle tags, normalized on save
    #[serde(default)]
    pub lifestyle: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, alias = "profile_image", rename = "profileImage")]
    pub profile_image: Option<String>,
}
