use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::reference::handlers;
use crate::features::reference::services::ReferenceService;

/// Admin routes for creating reference data
pub fn admin_routes(service: Arc<ReferenceService>) -> Router {
    Router::new()
        .route("/firestarter/admin/states", post(handlers::create_state))
        .route("/firestarter/admin/cities", post(handlers::create_city))
        .route(
            "/firestarter/admin/departments",
            post(handlers::create_department),
        )
        .route("/firestarter/admin/titles", post(handlers::create_title))
        .route("/firestarter/admin/causes", post(handlers::create_cause))
        .route("/firestarter/admin/injuries", post(handlers::create_injury))
        .route(
            "/firestarter/admin/story-links",
            post(handlers::create_story_link),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::*;
    use crate::core::database::unconnected_pool;

    fn server() -> TestServer {
        let service = Arc::new(ReferenceService::new(unconnected_pool()));
        TestServer::new(admin_routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_state_with_long_short_name_is_rejected() {
        let response = server()
            .post("/firestarter/admin/states")
            .json(&json!({ "name": "Illinois", "shortName": "ILLINOIS-STATE" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_city_name_without_letters_is_rejected() {
        server()
            .post("/firestarter/admin/cities")
            .json(&json!({ "name": "---", "stateId": 1 }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        server()
            .post("/firestarter/admin/departments")
            .json(&json!({ "name": "Springfield Fire Department" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_every_create_route_validates() {
        let server = server();
        for path in [
            "/firestarter/admin/titles",
            "/firestarter/admin/causes",
            "/firestarter/admin/injuries",
            "/firestarter/admin/story-links",
        ] {
            let response = server.post(path).json(&json!({})).await;
            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", path);
        }
    }

    #[tokio::test]
    async fn test_create_routes_only_accept_post() {
        server()
            .get("/firestarter/admin/states")
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
