use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::AppState;
use crate::models::{
    BrowseFilters, BrowseRoommatesRequest, BrowseRoommatesResponse, ErrorResponse, HealthResponse,
    RoommateDetailQuery, RoommateDetailResponse,
};
use crate::services::StoreError;

/// Configure roommate browse routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/roommates/browse", web::post().to(browse_roommates))
        .route("/roommates/{id}", web::get().to(view_roommate));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Browse roommates endpoint
///
/// POST /api/v1/roommates/browse
///
/// Request body:
/// ```json
/// {
///   "userId": 1,
///   "location": "austin",
///   "budgetMin": 500,
///   "budgetMax": 1500
/// }
/// ```
async fn browse_roommates(
    state: web::Data<AppState>,
    req: web::Json<BrowseRoommatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for browse_roommates request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Browsing roommates for user: {}", req.user_id);

    let requester = match state.store.get_profile(req.user_id).await {
        Ok(profile) => profile,
        Err(StoreError::NotFound(msg)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: msg,
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", req.user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch requester profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let filters = BrowseFilters {
        location: req.location.clone(),
        budget_min: req.budget_min,
        budget_max: req.budget_max,
    };

    let candidates = match state.store.list_profiles(Some(&filters)).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to list candidates for {}: {}", req.user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Found {} candidates for {}", candidates.len(), req.user_id);

    let result = state.browser.browse(&requester, candidates, &filters);

    let response = BrowseRoommatesResponse {
        roommates: result.roommates,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} roommates for user {} (from {} candidates)",
        response.roommates.len(),
        req.user_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Roommate detail endpoint
///
/// GET /api/v1/roommates/{id}?userId={requesterId}
///
/// Includes the pairwise compatibility when a requester id is supplied and
/// differs from the viewed profile.
async fn view_roommate(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<RoommateDetailQuery>,
) -> impl Responder {
    let id = path.into_inner();

    let profile = match state.store.get_profile(id).await {
        Ok(profile) => profile,
        Err(StoreError::NotFound(msg)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: msg,
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let compatibility = match query.user_id {
        Some(requester_id) if requester_id != id => {
            match state.store.get_profile(requester_id).await {
                Ok(requester) => Some(state.browser.score(&requester, &profile)),
                Err(e) => {
                    tracing::warn!("Failed to fetch requester {}: {}", requester_id, e);
                    None
                }
            }
        }
        _ => None,
    };

    HttpResponse::Ok().json(RoommateDetailResponse {
        profile,
        compatibility,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
