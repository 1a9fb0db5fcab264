use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::addresses::dtos::{
    AddressResponseDto, AddressSummaryDto, CreateAddressDto,
};
use crate::features::addresses::services::AddressService;
use crate::shared::types::ApiResponse;

/// Create an address
///
/// Owners are people who own the property; occupants are not modelled.
#[utoipa::path(
    post,
    path = "/firestarter/admin/addresses",
    request_body = CreateAddressDto,
    responses(
        (status = 201, description = "Address created", body = ApiResponse<AddressResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "City or owner not found")
    ),
    tag = "admin"
)]
pub async fn create_address(
    State(service): State<Arc<AddressService>>,
    AppJson(dto): AppJson<CreateAddressDto>,
) -> Result<(StatusCode, Json<ApiResponse<AddressResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let address = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(address), None, None)),
    ))
}

/// Get an address with its city and state
#[utoipa::path(
    get,
    path = "/firestarter/admin/addresses/{id}",
    params(
        ("id" = i64, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address found", body = ApiResponse<AddressSummaryDto>),
        (status = 404, description = "Address not found")
    ),
    tag = "admin"
)]
pub async fn get_address(
    State(service): State<Arc<AddressService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<AddressSummaryDto>>> {
    let detail = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(detail.into()), None, None)))
}
