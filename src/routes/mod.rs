// Route exports
pub mod listings;
pub mod profiles;
pub mod roommates;

use actix_web::web;
use std::sync::Arc;

use crate::core::Browser;
use crate::services::PostgresStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostgresStore>,
    pub browser: Browser,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(roommates::configure)
            .configure(listings::configure)
            .configure(profiles::configure),
    );
}
