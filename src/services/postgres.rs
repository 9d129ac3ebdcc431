use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::core::normalize::normalize_tags;
use crate::models::{BrowseFilters, Listing, ListingFilters, RoommateProfile};

/// Errors that can occur when interacting with the store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// PostgreSQL-backed store for roommate profiles and flat listings
///
/// Owns durability, identifier uniqueness and concurrent-access isolation.
/// Location and lifestyle fields are normalized here on the save path, so
/// the scorer never re-parses free text.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Fetch a single profile by id
    pub async fn get_profile(&self, id: i64) -> Result<RoommateProfile, StoreError> {
        let query = r#"
            SELECT id, name, age, gender, budget, preferred_locations, lifestyle_tags,
                   bio, profile_image, created_at
            FROM roommate_profiles
            WHERE id = $1
        "#;

        let row = sqlx::query(query).bind(id).fetch_optional(&self.pool).await?;

        match row {
            Some(row) => Ok(profile_from_row(&row)),
            None => Err(StoreError::NotFound(format!("profile {}", id))),
        }
    }

    /// List candidate profiles, optionally pre-filtered at the SQL level
    ///
    /// The browse core re-applies the filters authoritatively; the SQL
    /// predicates just keep the candidate set small. Stored locations are
    /// already lower-cased, so the LIKE needle must be too.
    pub async fn list_profiles(
        &self,
        filters: Option<&BrowseFilters>,
    ) -> Result<Vec<RoommateProfile>, StoreError> {
        let query = r#"
            SELECT id, name, age, gender, budget, preferred_locations, lifestyle_tags,
                   bio, profile_image, created_at
            FROM roommate_profiles
            WHERE ($1::text IS NULL
                   OR EXISTS (
                       SELECT 1 FROM unnest(preferred_locations) AS loc
                       WHERE loc LIKE '%' || $1 || '%'
                   ))
              AND ($2::bigint IS NULL OR budget >= $2)
              AND ($3::bigint IS NULL OR budget <= $3)
            ORDER BY created_at DESC
        "#;

        let (location, budget_min, budget_max) = match filters {
            Some(f) => (
                f.location
                    .as_deref()
                    .map(|l| l.trim().to_lowercase())
                    .filter(|l| !l.is_empty()),
                f.budget_min,
                f.budget_max,
            ),
            None => (None, None, None),
        };

        let rows = sqlx::query(query)
            .bind(location)
            .bind(budget_min)
            .bind(budget_max)
            .fetch_all(&self.pool)
            .await?;

        let profiles: Vec<RoommateProfile> = rows.iter().map(profile_from_row).collect();

        tracing::debug!("Listed {} candidate profiles", profiles.len());

        Ok(profiles)
    }

    /// Insert or update a profile
    ///
    /// Uses INSERT ... ON CONFLICT so repeated saves of the same id update
    /// in place. Location and lifestyle lists are normalized before they
    /// hit the table.
    pub async fn save_profile(&self, profile: &RoommateProfile) -> Result<(), StoreError> {
        let locations = normalize_tags(&profile.preferred_locations);
        let lifestyle = normalize_tags(&profile.lifestyle_tags);

        let query = r#"
            INSERT INTO roommate_profiles
                (id, name, age, gender, budget, preferred_locations, lifestyle_tags,
                 bio, profile_image)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id)
            DO UPDATE SET
                name = EXCLUDED.name,
                age = EXCLUDED.age,
                gender = EXCLUDED.gender,
                budget = EXCLUDED.budget,
                preferred_locations = EXCLUDED.preferred_locations,
                lifestyle_tags = EXCLUDED.lifestyle_tags,
                bio = EXCLUDED.bio,
                profile_image = EXCLUDED.profile_image
        "#;

        sqlx::query(query)
            .bind(profile.id)
            .bind(&profile.name)
            .bind(profile.age.map(|a| a as i16))
            .bind(&profile.gender)
            .bind(profile.budget)
            .bind(&locations)
            .bind(&lifestyle)
            .bind(&profile.bio)
            .bind(&profile.profile_image)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Saved profile {}", profile.id);

        Ok(())
    }

    /// List active listings matching the given filters, newest first
    pub async fn list_listings(&self, filters: &ListingFilters) -> Result<Vec<Listing>, StoreError> {
        let query = r#"
            SELECT id, user_id, title, location, rent, room_type, description,
                   amenities, available_from, is_active, image_paths, created_at
            FROM listings
            WHERE is_active = TRUE
              AND ($1::text IS NULL OR LOWER(location) LIKE '%' || $1 || '%')
              AND ($2::bigint IS NULL OR rent >= $2)
              AND ($3::bigint IS NULL OR rent <= $3)
              AND ($4::text IS NULL OR LOWER(room_type) = $4)
            ORDER BY created_at DESC
        "#;

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

        let rows = sqlx::query(query)
            .bind(location)
            .bind(filters.min_rent)
            .bind(filters.max_rent)
            .bind(room_type)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(listing_from_row).collect())
    }

    /// Insert a listing and return its assigned id
    ///
    /// The id on the input value is ignored; the table assigns a fresh one.
    pub async fn insert_listing(&self, listing: &Listing) -> Result<i64, StoreError> {
        let query = r#"
            INSERT INTO listings
                (user_id, title, location, rent, room_type, description, amenities,
                 available_from, is_active, image_paths)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(listing.user_id)
            .bind(&listing.title)
            .bind(&listing.location)
            .bind(listing.rent)
            .bind(&listing.room_type)
            .bind(&listing.description)
            .bind(&listing.amenities)
            .bind(listing.available_from)
            .bind(listing.is_active)
            .bind(&listing.image_paths)
            .fetch_one(&self.pool)
            .await?;

        let id: i64 = row.get("id");

        tracing::debug!("Inserted listing {} for user {}", id, listing.user_id);

        Ok(id)
    }

    /// Distinct locations across active listings, for filter dropdowns
    pub async fn listing_locations(&self) -> Result<Vec<String>, StoreError> {
        let query = r#"
            SELECT DISTINCT location
            FROM listings
            WHERE is_active = TRUE
            ORDER BY location
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(|row| row.get("location")).collect())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn profile_from_row(row: &PgRow) -> RoommateProfile {
    RoommateProfile {
        id: row.get("id"),
        name: row.get("name"),
        age: row.get::<Option<i16>, _>("age").map(|a| a as u8),
        gender: row.get("gender"),
        budget: row.get("budget"),
        preferred_locations: row.get("preferred_locations"),
        lifestyle_tags: row.get("lifestyle_tags"),
        bio: row.get("bio"),
        profile_image: row.get("profile_image"),
        created_at: row.get("created_at"),
    }
}

fn listing_from_row(row: &PgRow) -> Listing {
    Listing {
        id: row.get("id"),
        user_id: row.get("user_id"),
        title: row.get("title"),
        location: row.get("location"),
        rent: row.get("rent"),
        room_type: row.get("room_type"),
        description: row.get("description"),
        amenities: row.get("amenities"),
        available_from: row.get("available_from"),
        is_active: row.get("is_active"),
        image_paths: row.get("image_paths"),
        created_at: row.get("created_at"),
    }
}
