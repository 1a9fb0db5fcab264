use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::fires::handlers;
use crate::features::fires::services::FireService;

/// Public pages: the index and fire detail
pub fn routes(service: Arc<FireService>) -> Router {
    Router::new()
        .route("/firestarter/", get(handlers::index))
        .route(
            "/firestarter/fire/{id}/{address_slug}/",
            get(handlers::fire_detail),
        )
        .with_state(service)
}

/// Admin routes for creating and editing fires
pub fn admin_routes(service: Arc<FireService>) -> Router {
    Router::new()
        .route("/firestarter/admin/fires", post(handlers::create_fire))
        .route("/firestarter/admin/fires/{id}", put(handlers::update_fire))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::*;
    use crate::features::addresses::models::AddressDetail;
    use crate::features::fires::repository::test_support::InMemoryFireRepository;
    use crate::features::geocodes::services::test_support::ScriptedGeocoder;
    use crate::features::geocodes::GeocodingService;

    fn server() -> TestServer {
        let repository = InMemoryFireRepository::default().with_address(AddressDetail {
            id: 1,
            street: "100 Main St".to_string(),
            street_slug: "100-main-st".to_string(),
            property_value: None,
            city_id: 2,
            city_name: "Springfield".to_string(),
            state_id: 3,
            state_name: "Illinois".to_string(),
            state_short_name: "IL".to_string(),
        });
        let geocoder = ScriptedGeocoder::default().with_place(
            "100 Main St, Springfield, Illinois",
            39.78,
            -89.65,
        );
        let service = Arc::new(FireService::new(
            Arc::new(repository),
            Arc::new(GeocodingService::new(Arc::new(geocoder))),
        ));

        TestServer::new(routes(service.clone()).merge(admin_routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_view_fire() {
        let server = server();

        let response = server
            .post("/firestarter/admin/fires")
            .json(&json!({
                "locationId": 1,
                "date": "2011-03-04T10:00:00Z",
                "responseTime": "2011-03-04T10:30:00Z"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        let id = body["data"]["id"].as_i64().unwrap();
        assert!(body["data"]["geocodeId"].is_i64());
        assert_eq!(body["data"]["timeTookSeconds"], 1800);

        let response = server
            .get(&format!("/firestarter/fire/{}/100-main-st/", id))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["latitude"], 39.78);
        assert_eq!(body["data"]["longitude"], -89.65);
        assert_eq!(
            body["data"]["location"]["fullAddress"],
            "Illinois, Springfield, 100 Main St"
        );
    }

    #[tokio::test]
    async fn test_detail_ignores_slug_text() {
        let server = server();
        let response = server
            .post("/firestarter/admin/fires")
            .json(&json!({ "locationId": 1 }))
            .await;
        let id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

        server
            .get(&format!("/firestarter/fire/{}/anything-at-all/", id))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_unknown_fire_is_404() {
        server()
            .get("/firestarter/fire/999/100-main-st/")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_location_is_404() {
        server()
            .post("/firestarter/admin/fires")
            .json(&json!({ "locationId": 42 }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_negative_damage_is_rejected() {
        server()
            .post("/firestarter/admin/fires")
            .json(&json!({ "locationId": 1, "monetaryDamage": -5 }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_index_reports_total() {
        let server = server();
        for _ in 0..3 {
            server
                .post("/firestarter/admin/fires")
                .json(&json!({ "locationId": 1 }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server
            .get("/firestarter/")
            .add_query_param("pageSize", 2)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 3);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["city"], "Springfield");
    }

    #[tokio::test]
    async fn test_update_unknown_fire_is_404() {
        server()
            .put("/firestarter/admin/fires/77")
            .json(&json!({ "locationId": 1 }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
