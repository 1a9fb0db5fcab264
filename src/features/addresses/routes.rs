use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::addresses::handlers;
use crate::features::addresses::services::AddressService;

/// Admin routes for the address registry
pub fn admin_routes(service: Arc<AddressService>) -> Router {
    Router::new()
        .route("/firestarter/admin/addresses", post(handlers::create_address))
        .route("/firestarter/admin/addresses/{id}", get(handlers::get_address))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use super::*;
    use crate::core::database::unconnected_pool;

    fn server() -> TestServer {
        let service = Arc::new(AddressService::new(unconnected_pool()));
        TestServer::new(admin_routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_negative_property_value_is_rejected() {
        server()
            .post("/firestarter/admin/addresses")
            .json(&json!({ "street": "100 Main St", "cityId": 1, "propertyValue": -1 }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_street_without_letters_is_rejected() {
        server()
            .post("/firestarter/admin/addresses")
            .json(&json!({ "street": "#", "cityId": 1 }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        server()
            .get("/firestarter/admin/addresses/main-st")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
