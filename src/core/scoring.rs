use std::collections::HashSet;

use crate::models::{CompatibilityScore, RoommateProfile, ScoringWeights};

/// Upper bound on the reported total score
pub const MAX_SCORE: f64 = 10.0;

/// Calculate a compatibility score (0-10) between two roommate profiles
///
/// Scoring formula:
/// score = (
///     location_match * 5 +        # any shared preferred location
///     budget_closeness * 3 +      # closer budgets = higher
///     lifestyle_overlap * 2       # Jaccard similarity of tag sets
/// )
///
/// Components are reported unrounded; the total is clamped to [0, 10] and
/// rounded to one decimal so downstream sorting compares stable values.
/// Every term is symmetric in its inputs, so score(a, b) == score(b, a).
pub fn calculate_compatibility(
    requester: &RoommateProfile,
    candidate: &RoommateProfile,
    weights: &ScoringWeights,
) -> CompatibilityScore {
    let location = location_match(&requester.preferred_locations, &candidate.preferred_locations)
        * weights.location;

    let budget = budget_closeness(requester.budget_or_zero(), candidate.budget_or_zero())
        * weights.budget;

    let lifestyle = lifestyle_overlap(&requester.lifestyle_tags, &candidate.lifestyle_tags)
        * weights.lifestyle;

    let total = round_tenth((location + budget + lifestyle).clamp(0.0, MAX_SCORE));

    CompatibilityScore {
        location,
        budget,
        lifestyle,
        total,
    }
}

/// Location match factor (0 or 1)
///
/// Binary: any shared preferred location earns the full factor. Both lists
/// arrive pre-normalized, so plain equality is enough.
#[inline]
fn location_match(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();

    if b.iter().any(|loc| a.contains(loc.as_str())) {
        1.0
    } else {
        0.0
    }
}

/// Budget closeness factor (0-1)
///
/// closeness = 1 - |a - b| / max(a, b, 1)
///
/// The denominator floor of 1 keeps two zero (or missing) budgets at full
/// closeness instead of dividing by zero.
#[inline]
fn budget_closeness(a: i64, b: i64) -> f64 {
    let diff = (a - b).abs() as f64;
    let max = a.max(b).max(1) as f64;

    (1.0 - diff / max).clamp(0.0, 1.0)
}

/// Lifestyle overlap factor (0-1)
///
/// Jaccard similarity of the two normalized tag sets. Empty sets on either
/// side simply yield zero overlap.
#[inline]
fn lifestyle_overlap(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let intersection = a.intersection(&b).count() as f64;
    let union = a.union(&b).count().max(1) as f64;

    intersection / union
}

#[inline]
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
