use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::AppState;
use crate::core::{filter_listings, normalize::split_field};
use crate::models::{
    BrowseListingsQuery, BrowseListingsResponse, CreateListingRequest, CreateListingResponse,
    ErrorResponse, Listing, ListingFilters,
};

/// Configure listing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/listings", web::get().to(browse_listings))
        .route("/listings", web::post().to(create_listing));
}

/// Browse listings endpoint
///
/// GET /api/v1/listings?location=&minRent=&maxRent=&roomType=
async fn browse_listings(
    state: web::Data<AppState>,
    query: web::Query<BrowseListingsQuery>,
) -> impl Responder {
    let filters = ListingFilters {
        location: query.location.clone(),
        min_rent: query.min_rent,
        max_rent: query.max_rent,
        room_type: query.room_type.clone(),
    };

    let listings = match state.store.list_listings(&filters).await {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("Failed to list listings: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list listings".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    // SQL already filtered; the core pass re-applies the predicates and
    // fixes the ordering tie-break
    let listings = filter_listings(listings, &filters);

    let locations = match state.store.listing_locations().await {
        Ok(locations) => locations,
        Err(e) => {
            tracing::warn!("Failed to fetch listing locations: {}", e);
            vec![]
        }
    };

    tracing::debug!("Returning {} listings", listings.len());

    HttpResponse::Ok().json(BrowseListingsResponse {
        total: listings.len(),
        listings,
        locations,
    })
}

/// Create listing endpoint
///
/// POST /api/v1/listings
async fn create_listing(
    state: web::Data<AppState>,
    req: web::Json<CreateListingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_listing request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let listing = Listing {
        // Assigned by the store on insert
        id: 0,
        user_id: req.user_id,
        title: req.title.trim().to_string(),
        location: req.location.trim().to_string(),
        rent: req.rent,
        room_type: req.room_type.trim().to_string(),
        description: req.description.clone(),
        amenities: split_field(&req.amenities),
        available_from: req.available_from,
        is_active: true,
        image_paths: req.image_paths.clone(),
        created_at: None,
    };

    match state.store.insert_listing(&listing).await {
        Ok(listing_id) => {
            tracing::info!("Created listing {} for user {}", listing_id, req.user_id);
            HttpResponse::Ok().json(CreateListingResponse {
                success: true,
                listing_id,
            })
        }
        Err(e) => {
            tracing::error!("Failed to create listing for {}: {}", req.user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create listing".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
