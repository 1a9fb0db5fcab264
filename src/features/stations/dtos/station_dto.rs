use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::stations::models::StationDetail;

/// Request DTO for creating a station
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStationDto {
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: String,

    pub department_id: i64,

    pub address_id: i64,
}

/// Response DTO for station
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StationResponseDto {
    pub id: i64,
    pub name: String,
    pub name_slug: String,
    pub department_id: i64,
    pub department: String,
    pub address_id: i64,
    pub street: String,
}

impl From<StationDetail> for StationResponseDto {
    fn from(s: StationDetail) -> Self {
        Self {
            id: s.id,
            name: s.name,
            name_slug: s.name_slug,
            department_id: s.department_id,
            department: s.department_name,
            address_id: s.address_id,
            street: s.street,
        }
    }
}
