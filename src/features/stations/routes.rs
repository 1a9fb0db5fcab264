use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::stations::handlers;
use crate::features::stations::services::StationService;

/// Admin routes for the station registry
pub fn admin_routes(service: Arc<StationService>) -> Router {
    Router::new()
        .route("/firestarter/admin/stations", post(handlers::create_station))
        .with_state(service)
}
