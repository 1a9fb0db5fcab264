use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::fires::dtos::{
    FireDetailDto, FireResponseDto, FireSummaryDto, SaveFireDto,
};
use crate::features::fires::services::FireService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List fires, most recent first
#[utoipa::path(
    get,
    path = "/firestarter/",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of fires", body = ApiResponse<Vec<FireSummaryDto>>)
    ),
    tag = "fires"
)]
pub async fn index(
    State(service): State<Arc<FireService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<FireSummaryDto>>>> {
    let (items, total) = service.list_recent(&params).await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Get a fire with its location, geocode and related records.
///
/// The slug segment is cosmetic; the fire is resolved by id alone.
#[utoipa::path(
    get,
    path = "/firestarter/fire/{id}/{address_slug}/",
    params(
        ("id" = i64, Path, description = "Fire ID"),
        ("address_slug" = String, Path, description = "Street slug of the fire location")
    ),
    responses(
        (status = 200, description = "Fire found", body = ApiResponse<FireDetailDto>),
        (status = 404, description = "Fire not found")
    ),
    tag = "fires"
)]
pub async fn fire_detail(
    State(service): State<Arc<FireService>>,
    Path((id, _address_slug)): Path<(i64, String)>,
) -> Result<Json<ApiResponse<FireDetailDto>>> {
    let fire = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(fire), None, None)))
}

/// Create a fire
///
/// The location is geocoded on save unless `geocodeId` is given. A failed
/// lookup is recorded on the geocode and does not fail the request.
#[utoipa::path(
    post,
    path = "/firestarter/admin/fires",
    request_body = SaveFireDto,
    responses(
        (status = 201, description = "Fire created", body = ApiResponse<FireResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Location or related record not found")
    ),
    tag = "admin"
)]
pub async fn create_fire(
    State(service): State<Arc<FireService>>,
    AppJson(dto): AppJson<SaveFireDto>,
) -> Result<(StatusCode, Json<ApiResponse<FireResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fire = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(fire),
            Some("Fire created".to_string()),
            None,
        )),
    ))
}

/// Update a fire
#[utoipa::path(
    put,
    path = "/firestarter/admin/fires/{id}",
    params(
        ("id" = i64, Path, description = "Fire ID")
    ),
    request_body = SaveFireDto,
    responses(
        (status = 200, description = "Fire updated", body = ApiResponse<FireResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Fire or related record not found")
    ),
    tag = "admin"
)]
pub async fn update_fire(
    State(service): State<Arc<FireService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<SaveFireDto>,
) -> Result<Json<ApiResponse<FireResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fire = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(fire),
        Some("Fire updated".to_string()),
        None,
    )))
}
