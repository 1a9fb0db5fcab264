use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Database model for a geocoding attempt.
///
/// When `geocode_error` is set the coordinates are meaningless and callers
/// must go through [`Geocode::coordinates`].
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Geocode {
    pub id: i64,
    pub address_id: Option<i64>,
    pub computed_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub geocode_error: bool,
    pub created_at: DateTime<Utc>,
}

impl Geocode {
    /// `(latitude, longitude)` when the attempt succeeded
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        if self.geocode_error {
            return None;
        }
        Some((self.latitude?, self.longitude?))
    }
}

impl std::fmt::Display for Geocode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.coordinates() {
            Some((lat, lon)) => write!(f, "{:.5}, {:.5}", lat, lon),
            None => write!(f, "unresolved"),
        }
    }
}

/// Data for inserting a geocode
#[derive(Debug, Clone, PartialEq)]
pub struct NewGeocode {
    pub address_id: Option<i64>,
    pub computed_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub geocode_error: bool,
}
