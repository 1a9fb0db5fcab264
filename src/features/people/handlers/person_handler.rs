use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::people::dtos::{
    CreatePersonDto, CreateSourceDto, CreateVictimDto, PersonDetailDto, SourceResponseDto,
    VictimResponseDto,
};
use crate::features::people::models::Person;
use crate::features::people::services::PeopleService;
use crate::shared::types::ApiResponse;

/// Get a person with their title, properties and fire history.
///
/// The slug segment is cosmetic; the person is resolved by id alone.
#[utoipa::path(
    get,
    path = "/firestarter/person/{id}/{name_slug}/",
    params(
        ("id" = i64, Path, description = "Person ID"),
        ("name_slug" = String, Path, description = "Name slug of the person")
    ),
    responses(
        (status = 200, description = "Person found", body = ApiResponse<PersonDetailDto>),
        (status = 404, description = "Person not found")
    ),
    tag = "people"
)]
pub async fn person_detail(
    State(service): State<Arc<PeopleService>>,
    Path((id, _name_slug)): Path<(i64, String)>,
) -> Result<Json<ApiResponse<PersonDetailDto>>> {
    let person = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(person), None, None)))
}

/// Create a person
#[utoipa::path(
    post,
    path = "/firestarter/admin/people",
    request_body = CreatePersonDto,
    responses(
        (status = 201, description = "Person created", body = ApiResponse<Person>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Title not found")
    ),
    tag = "admin"
)]
pub async fn create_person(
    State(service): State<Arc<PeopleService>>,
    AppJson(dto): AppJson<CreatePersonDto>,
) -> Result<(StatusCode, Json<ApiResponse<Person>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let person = service.create_person(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(person), None, None)),
    ))
}

/// Record a person as injured
#[utoipa::path(
    post,
    path = "/firestarter/admin/victims",
    request_body = CreateVictimDto,
    responses(
        (status = 201, description = "Victim created", body = ApiResponse<VictimResponseDto>),
        (status = 404, description = "Person or injury not found")
    ),
    tag = "admin"
)]
pub async fn create_victim(
    State(service): State<Arc<PeopleService>>,
    AppJson(dto): AppJson<CreateVictimDto>,
) -> Result<(StatusCode, Json<ApiResponse<VictimResponseDto>>)> {
    let victim = service.create_victim(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(victim), None, None)),
    ))
}

/// Record a person as an information source
#[utoipa::path(
    post,
    path = "/firestarter/admin/sources",
    request_body = CreateSourceDto,
    responses(
        (status = 201, description = "Source created", body = ApiResponse<SourceResponseDto>),
        (status = 404, description = "Person not found")
    ),
    tag = "admin"
)]
pub async fn create_source(
    State(service): State<Arc<PeopleService>>,
    AppJson(dto): AppJson<CreateSourceDto>,
) -> Result<(StatusCode, Json<ApiResponse<SourceResponseDto>>)> {
    let source = service.create_source(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(source), None, None)),
    ))
}
