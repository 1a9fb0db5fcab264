use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Admin registry index
pub fn routes(admin_service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/firestarter/admin/", get(handlers::list_entities))
        .with_state(admin_service)
}
