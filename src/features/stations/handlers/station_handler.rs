use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::stations::dtos::{CreateStationDto, StationResponseDto};
use crate::features::stations::services::StationService;
use crate::shared::types::ApiResponse;

/// Create a station
#[utoipa::path(
    post,
    path = "/firestarter/admin/stations",
    request_body = CreateStationDto,
    responses(
        (status = 201, description = "Station created", body = ApiResponse<StationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Department or address not found")
    ),
    tag = "admin"
)]
pub async fn create_station(
    State(service): State<Arc<StationService>>,
    AppJson(dto): AppJson<CreateStationDto>,
) -> Result<(StatusCode, Json<ApiResponse<StationResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let station = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(station), None, None)),
    ))
}
