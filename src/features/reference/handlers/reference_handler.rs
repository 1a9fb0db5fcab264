use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reference::dtos::{
    CreateCauseDto, CreateCityDto, CreateDepartmentDto, CreateInjuryDto, CreateStateDto,
    CreateStoryLinkDto, CreateTitleDto,
};
use crate::features::reference::models;
use crate::features::reference::services::ReferenceService;
use crate::shared::types::ApiResponse;

/// Create a state
#[utoipa::path(
    post,
    path = "/firestarter/admin/states",
    request_body = CreateStateDto,
    responses(
        (status = 201, description = "State created", body = ApiResponse<models::State>),
        (status = 400, description = "Validation error"),
    ),
    tag = "admin"
)]
pub async fn create_state(
    State(service): State<Arc<ReferenceService>>,
    AppJson(dto): AppJson<CreateStateDto>,
) -> Result<(StatusCode, Json<ApiResponse<models::State>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.create_state(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(record), None, None)),
    ))
}

/// Create a city
#[utoipa::path(
    post,
    path = "/firestarter/admin/cities",
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "City created", body = ApiResponse<models::City>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "State not found"),
    ),
    tag = "admin"
)]
pub async fn create_city(
    State(service): State<Arc<ReferenceService>>,
    AppJson(dto): AppJson<CreateCityDto>,
) -> Result<(StatusCode, Json<ApiResponse<models::City>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.create_city(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(record), None, None)),
    ))
}

/// Create a department
#[utoipa::path(
    post,
    path = "/firestarter/admin/departments",
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Department created", body = ApiResponse<models::Department>),
        (status = 400, description = "Validation error"),
    ),
    tag = "admin"
)]
pub async fn create_department(
    State(service): State<Arc<ReferenceService>>,
    AppJson(dto): AppJson<CreateDepartmentDto>,
) -> Result<(StatusCode, Json<ApiResponse<models::Department>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.create_department(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(record), None, None)),
    ))
}

/// Create a title
#[utoipa::path(
    post,
    path = "/firestarter/admin/titles",
    request_body = CreateTitleDto,
    responses(
        (status = 201, description = "Title created", body = ApiResponse<models::Title>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Employer department not found"),
    ),
    tag = "admin"
)]
pub async fn create_title(
    State(service): State<Arc<ReferenceService>>,
    AppJson(dto): AppJson<CreateTitleDto>,
) -> Result<(StatusCode, Json<ApiResponse<models::Title>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.create_title(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(record), None, None)),
    ))
}

/// Create a cause
#[utoipa::path(
    post,
    path = "/firestarter/admin/causes",
    request_body = CreateCauseDto,
    responses(
        (status = 201, description = "Cause created", body = ApiResponse<models::Cause>),
        (status = 400, description = "Validation error"),
    ),
    tag = "admin"
)]
pub async fn create_cause(
    State(service): State<Arc<ReferenceService>>,
    AppJson(dto): AppJson<CreateCauseDto>,
) -> Result<(StatusCode, Json<ApiResponse<models::Cause>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.create_cause(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(record), None, None)),
    ))
}

/// Create a injury
#[utoipa::path(
    post,
    path = "/firestarter/admin/injuries",
    request_body = CreateInjuryDto,
    responses(
        (status = 201, description = "Injury created", body = ApiResponse<models::Injury>),
        (status = 400, description = "Validation error"),
    ),
    tag = "admin"
)]
pub async fn create_injury(
    State(service): State<Arc<ReferenceService>>,
    AppJson(dto): AppJson<CreateInjuryDto>,
) -> Result<(StatusCode, Json<ApiResponse<models::Injury>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.create_injury(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(record), None, None)),
    ))
}

/// Create a story link
#[utoipa::path(
    post,
    path = "/firestarter/admin/story-links",
    request_body = CreateStoryLinkDto,
    responses(
        (status = 201, description = "Story link created", body = ApiResponse<models::StoryLink>),
        (status = 400, description = "Validation error"),
    ),
    tag = "admin"
)]
pub async fn create_story_link(
    State(service): State<Arc<ReferenceService>>,
    AppJson(dto): AppJson<CreateStoryLinkDto>,
) -> Result<(StatusCode, Json<ApiResponse<models::StoryLink>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.create_story_link(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(record), None, None)),
    ))
}
