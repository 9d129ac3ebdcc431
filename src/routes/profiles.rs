use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::AppState;
use crate::core::normalize::parse_tags;
use crate::models::{
    ErrorResponse, RoommateProfile, SaveProfileRequest, SaveProfileResponse,
};
use crate::services::StoreError;

/// Configure profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profiles/{id}", web::get().to(get_profile))
        .route("/profiles/{id}", web::put().to(save_profile));
}

/// Fetch a profile by id
///
/// GET /api/v1/profiles/{id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();

    match state.store.get_profile(id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(StoreError::NotFound(msg)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: msg,
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Save (upsert) a profile
///
/// PUT /api/v1/profiles/{id}
///
/// Comma-separated location and lifestyle fields are parsed and normalized
/// here, before the profile reaches the store - the scorer only ever sees
/// normalized sets.
async fn save_profile(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<SaveProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for save_profile request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let id = path.into_inner();

    let profile = RoommateProfile {
        id,
        name: req.name.trim().to_string(),
        age: req.age,
        gender: req.gender.clone(),
        budget: req.budget,
        preferred_locations: parse_tags(&req.preferred_locations),
        lifestyle_tags: parse_tags(&req.lifestyle),
        bio: req.bio.clone(),
        profile_image: req.profile_image.clone(),
        created_at: None,
    };

    match state.store.save_profile(&profile).await {
        Ok(()) => {
            tracing::info!("Saved profile {}", id);
            HttpResponse::Ok().json(SaveProfileResponse { success: true })
        }
        Err(e) => {
            tracing::error!("Failed to save profile {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to save profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
