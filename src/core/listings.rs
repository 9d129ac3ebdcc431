use crate::models::{Listing, ListingFilters};

/// Apply listing browse filters and order newest-first
///
/// Keeps active listings matching the location substring
/// (case-insensitive), inclusive rent bounds, and room type. Ordering is
/// `created_at` descending with id descending as the tie-break, so
/// identical inputs always produce identical ordering.
pub fn filter_listings(listings: Vec<Listing>, filters: &ListingFilters) -> Vec<Listing> {
    let location = filters
        .location
        .as_deref()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty());
    let room_type = filters
        .room_type
        .as_deref()
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty());

    let mut listings: Vec<Listing> = listings
        .into_iter()
        .filter(|listing| listing.is_active)
        .filter(|listing| {
            location
                .as_deref()
                .map_or(true, |needle| listing.location.to_lowercase().contains(needle))
        })
        .filter(|listing| filters.min_rent.map_or(true, |min| listing.rent >= min))
        .filter(|listing| filters.max_rent.map_or(true, |max| listing.rent <= max))
        .filter(|listing| {
            room_type
                .as_deref()
                .map_or(true, |rt| listing.room_type.to_lowercase() == rt)
        })
        .collect();

    listings.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });

    listings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_listing(id: i64, location: &str, rent: i64, room_type: &str, day: u32) -> Listing {
        Listing {
            id,
            user_id: 1,
            title: format!("Listing {}", id),
            location: location.to_string(),
            rent,
            room_type: room_type.to_string(),
            description: None,
            amenities: vec![],
            available_from: None,
            is_active: true,
            image_paths: vec![],
            created_at: Some(Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_inactive_listings_dropped() {
        let mut inactive = create_listing(1, "Mumbai", 12000, "Private Room", 1);
        inactive.is_active = false;

        let listings = vec![inactive, create_listing(2, "Mumbai", 9000, "Private Room", 2)];

        let result = filter_listings(listings, &ListingFilters::default());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_location_substring_case_insensitive() {
        let listings = vec![
            create_listing(1, "Mumbai", 12000, "Private Room", 1),
            create_listing(2, "Navi Mumbai", 8000, "Shared Room", 2),
            create_listing(3, "Pune", 6000, "Shared Room", 3),
        ];

        let filters = ListingFilters {
            location: Some("mumbai".to_string()),
            ..Default::default()
        };

        let result = filter_listings(listings, &filters);

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|l| l.location.to_lowercase().contains("mumbai")));
    }

    #[test]
    fn test_rent_bounds_inclusive() {
        let listings = vec![
            create_listing(1, "Pune", 4500, "Shared Room", 1),
            create_listing(2, "Pune", 6000, "Shared Room", 2),
            create_listing(3, "Pune", 9000, "Private Room", 3),
        ];

        let filters = ListingFilters {
            min_rent: Some(4500),
            max_rent: Some(6000),
            ..Default::default()
        };

        let result = filter_listings(listings, &filters);

        let ids: Vec<i64> = result.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_room_type_equality() {
        let listings = vec![
            create_listing(1, "Bangalore", 22000, "Entire Flat", 1),
            create_listing(2, "Bangalore", 9000, "Private Room", 2),
        ];

        let filters = ListingFilters {
            room_type: Some("entire flat".to_string()),
            ..Default::default()
        };

        let result = filter_listings(listings, &filters);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_ordered_newest_first() {
        let listings = vec![
            create_listing(1, "Delhi", 7000, "Private Room", 3),
            create_listing(2, "Delhi", 7000, "Private Room", 9),
            create_listing(3, "Delhi", 7000, "Private Room", 6),
        ];

        let result = filter_listings(listings, &ListingFilters::default());

        let ids: Vec<i64> = result.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
