use crate::core::{filters::matches_browse_filters, scoring::calculate_compatibility};
use crate::models::{BrowseFilters, CompatibilityScore, RoommateProfile, ScoredRoommate, ScoringWeights};

/// Result of a browse pass
#[derive(Debug)]
pub struct BrowseResult {
    pub roommates: Vec<ScoredRoommate>,
    pub total_candidates: usize,
}

/// Browse orchestrator - filters, scores and ranks roommate candidates
///
/// # Pipeline
/// 1. Exclude the requester's own profile
/// 2. Apply location/budget predicate filters
/// 3. Score each survivor against the requester
/// 4. Rank by compatibility
#[derive(Debug, Clone)]
pub struct Browser {
    weights: ScoringWeights,
}

impl Browser {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Run the browse pipeline over a candidate list
    ///
    /// The candidate collection is consumed, never mutated in place; the
    /// result is a new ordered sequence. Sorting is descending by total
    /// score with candidate id ascending as the tie-break, so identical
    /// inputs always produce identical ordering.
    ///
    /// # Arguments
    /// * `requester` - The browsing user's profile
    /// * `candidates` - All candidate profiles from the store
    /// * `filters` - Optional location and inclusive budget bounds
    pub fn browse(
        &self,
        requester: &RoommateProfile,
        candidates: Vec<RoommateProfile>,
        filters: &BrowseFilters,
    ) -> BrowseResult {
        let total_candidates = candidates.len();

        let mut roommates: Vec<ScoredRoommate> = candidates
            .into_iter()
            .filter(|profile| profile.id != requester.id)
            .filter(|profile| matches_browse_filters(profile, filters))
            .map(|profile| {
                let compatibility = calculate_compatibility(requester, &profile, &self.weights);
                ScoredRoommate {
                    profile,
                    compatibility,
                }
            })
            .collect();

        roommates.sort_by(|a, b| {
            b.compatibility
                .total
                .partial_cmp(&a.compatibility.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.profile.id.cmp(&b.profile.id))
        });

        BrowseResult {
            roommates,
            total_candidates,
        }
    }

    /// Score a single candidate against the requester
    pub fn score(
        &self,
        requester: &RoommateProfile,
        candidate: &RoommateProfile,
    ) -> CompatibilityScore {
        calculate_compatibility(requester, candidate, &self.weights)
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
