use crate::models::{BrowseFilters, RoommateProfile};

/// Check whether a candidate's preferred locations match a free-text filter
///
/// Case-insensitive substring match against any entry of the candidate's
/// preferred-location set. An empty filter matches everything.
#[inline]
pub fn matches_location(profile: &RoommateProfile, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    profile
        .preferred_locations
        .iter()
        .any(|location| location.contains(&needle))
}

/// Check whether a candidate's budget falls within the given inclusive bounds
///
/// A candidate without a budget fails any active bound.
#[inline]
pub fn within_budget(profile: &RoommateProfile, min: Option<i64>, max: Option<i64>) -> bool {
    match profile.budget {
        Some(budget) => {
            min.map_or(true, |m| budget >= m) && max.map_or(true, |m| budget <= m)
        }
        None => min.is_none() && max.is_none(),
    }
}

/// Check a candidate against all browse filters
#[inline]
pub fn matches_browse_filters(profile: &RoommateProfile, filters: &BrowseFilters) -> bool {
    if let Some(location) = &filters.location {
        if !matches_location(profile, location) {
            return false;
        }
    }

    within_budget(profile, filters.budget_min, filters.budget_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_profile(id: i64, budget: Option<i64>, locations: &[&str]) -> RoommateProfile {
        RoommateProfile {
            id,
            name: format!("User {}", id),
            age: None,
            gender: None,
            budget,
            preferred_locations: locations.iter().map(|s| s.to_string()).collect(),
            lifestyle_tags: vec![],
            bio: None,
            profile_image: None,
            created_at: None,
        }
    }

    #[test]
    fn test_location_substring_match() {
        let profile = create_profile(1, None, &["new york", "jersey city"]);

        assert!(matches_location(&profile, "york"));
        assert!(matches_location(&profile, " Jersey "));
        assert!(!matches_location(&profile, "boston"));
    }

    #[test]
    fn test_empty_location_filter_matches_all() {
        let profile = create_profile(1, None, &[]);

        assert!(matches_location(&profile, ""));
        assert!(matches_location(&profile, "   "));
    }

    #[test]
    fn test_budget_bounds_inclusive() {
        let profile = create_profile(1, Some(1200), &[]);

        assert!(within_budget(&profile, Some(1200), None));
        assert!(within_budget(&profile, None, Some(1200)));
        assert!(within_budget(&profile, Some(1000), Some(1500)));
        assert!(!within_budget(&profile, Some(1201), None));
        assert!(!within_budget(&profile, None, Some(1199)));
    }

    #[test]
    fn test_missing_budget_fails_active_bounds() {
        let profile = create_profile(1, None, &[]);

        assert!(within_budget(&profile, None, None));
        assert!(!within_budget(&profile, Some(500), None));
        assert!(!within_budget(&profile, None, Some(2000)));
    }

    #[test]
    fn test_combined_filters() {
        let profile = create_profile(1, Some(800), &["pune", "mumbai"]);

        let matching = BrowseFilters {
            location: Some("Pune".to_string()),
            budget_min: Some(500),
            budget_max: Some(1000),
        };
        assert!(matches_browse_filters(&profile, &matching));

        let wrong_location = BrowseFilters {
            location: Some("delhi".to_string()),
            ..Default::default()
        };
        assert!(!matches_browse_filters(&profile, &wrong_location));

        let too_expensive = BrowseFilters {
            budget_min: Some(1500),
            ..Default::default()
        };
        assert!(!matches_browse_filters(&profile, &too_expensive));
    }
}
