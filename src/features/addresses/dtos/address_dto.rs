use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::addresses::models::{Address, AddressDetail};

/// Request DTO for creating an address
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressDto {
    #[validate(length(min = 1, max = 150, message = "Street must be 1-150 characters"))]
    pub street: String,

    pub city_id: i64,

    #[validate(range(min = 0, message = "Property value must not be negative"))]
    pub property_value: Option<i64>,

    /// People owning the property (not occupants)
    #[serde(default)]
    pub owner_ids: Vec<i64>,
}

/// Response DTO for address
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponseDto {
    pub id: i64,
    pub street: String,
    pub street_slug: String,
    pub city_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_value: Option<i64>,
    pub owner_ids: Vec<i64>,
}

impl AddressResponseDto {
    pub fn from_address(address: Address, owner_ids: Vec<i64>) -> Self {
        Self {
            id: address.id,
            street: address.street,
            street_slug: address.street_slug,
            city_id: address.city_id,
            property_value: address.property_value,
            owner_ids,
        }
    }
}

/// Address as embedded in fire and person detail views
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressSummaryDto {
    pub id: i64,
    pub street: String,
    pub street_slug: String,
    pub city: String,
    pub state: String,
    pub state_short_name: String,
    pub full_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_value: Option<i64>,
}

impl From<AddressDetail> for AddressSummaryDto {
    fn from(detail: AddressDetail) -> Self {
        let full_address = detail.full_address();
        Self {
            id: detail.id,
            street: detail.street,
            street_slug: detail.street_slug,
            city: detail.city_name,
            state: detail.state_name,
            state_short_name: detail.state_short_name,
            full_address,
            property_value: detail.property_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_ids_default_to_empty() {
        let dto: CreateAddressDto = serde_json::from_value(serde_json::json!({
            "street": "100 Main St",
            "cityId": 4
        }))
        .unwrap();
        assert!(dto.owner_ids.is_empty());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_negative_property_value_rejected() {
        let dto = CreateAddressDto {
            street: "100 Main St".to_string(),
            city_id: 4,
            property_value: Some(-1),
            owner_ids: vec![],
        };
        assert!(dto.validate().is_err());
    }
}
