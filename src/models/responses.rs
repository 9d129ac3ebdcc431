use serde::{Deserialize, Serialize};

use crate::models::domain::{CompatibilityScore, Listing, RoommateProfile, ScoredRoommate};

/// Response for the roommate browse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseRoommatesResponse {
    pub roommates: Vec<ScoredRoommate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the roommate detail endpoint
///
/// `compatibility` is present only when a requester was supplied and is
/// not the viewed profile itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoommateDetailResponse {
    pub profile: RoommateProfile,
    #[serde(default)]
    pub compatibility: Option<CompatibilityScore>,
}

/// Response for the listing browse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseListingsResponse {
    pub listings: Vec<Listing>,
    pub total: usize,
    /// Distinct locations across active listings, for filter dropdowns
    pub locations: Vec<String>,
}

/// Response after creating a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListingResponse {
    pub success: bool,
    #[serde(rename = "listingId")]
    pub listing_id: i64,
}

/// Response after saving a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveProfileResponse {
    pub success: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
