// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BrowseFilters, CompatibilityScore, Listing, ListingFilters, RoommateProfile, ScoredRoommate,
    ScoringWeights,
};
pub use requests::{
    BrowseListingsQuery, BrowseRoommatesRequest, CreateListingRequest, RoommateDetailQuery,
    SaveProfileRequest,
};
pub use responses::{
    BrowseListingsResponse, BrowseRoommatesResponse, CreateListingResponse, ErrorResponse,
    HealthResponse, RoommateDetailResponse, SaveProfileResponse,
};
