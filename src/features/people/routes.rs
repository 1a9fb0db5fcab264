use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::people::handlers;
use crate::features::people::services::PeopleService;

/// Public person page
pub fn routes(service: Arc<PeopleService>) -> Router {
    Router::new()
        .route(
            "/firestarter/person/{id}/{name_slug}/",
            get(handlers::person_detail),
        )
        .with_state(service)
}

/// Admin routes for people, victims and sources
pub fn admin_routes(service: Arc<PeopleService>) -> Router {
    Router::new()
        .route("/firestarter/admin/people", post(handlers::create_person))
        .route("/firestarter/admin/victims", post(handlers::create_victim))
        .route("/firestarter/admin/sources", post(handlers::create_source))
        .with_state(service)
}
