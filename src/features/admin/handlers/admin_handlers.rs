use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::admin::dtos::AdminEntityDto;
use crate::features::admin::services::AdminService;
use crate::shared::types::{ApiResponse, Meta};

/// List admin-managed entities with their record counts
#[utoipa::path(
    get,
    path = "/firestarter/admin/",
    responses(
        (status = 200, description = "Admin registry", body = ApiResponse<Vec<AdminEntityDto>>)
    ),
    tag = "admin"
)]
pub async fn list_entities(
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<Vec<AdminEntityDto>>>> {
    let items = service.list_entities().await?;
    let total = items.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}
