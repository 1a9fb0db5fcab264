use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Database model for address
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub street_slug: String,
    pub city_id: i64,
    pub property_value: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.street)
    }
}

/// Address joined with its city and state
#[derive(Debug, Clone, FromRow)]
pub struct AddressDetail {
    pub id: i64,
    pub street: String,
    pub street_slug: String,
    pub property_value: Option<i64>,
    pub city_id: i64,
    pub city_name: String,
    pub state_id: i64,
    pub state_name: String,
    pub state_short_name: String,
}

impl AddressDetail {
    /// "<state>, <city>, <street>"
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.state_name, self.city_name, self.street)
    }

    /// Free-text query submitted to the geocoding provider
    pub fn geocoding_query(&self) -> String {
        format!("{}, {}, {}", self.street, self.city_name, self.state_name)
    }
}

impl std::fmt::Display for AddressDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.street)
    }
}
