use async_trait::async_trait;
use serde::Deserialize;

use super::{GeocodeError, GeocodedPlace, Geocoder};
use crate::core::config::GeocoderConfig;

/// Nominatim search result (only the fields we consume)
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    lat: String,
    lon: String,
    display_name: String,
}

/// Client for the Nominatim (OpenStreetMap) free-form search endpoint
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn lookup(&self, query: &str) -> Result<Option<GeocodedPlace>, GeocodeError> {
        let url = self.search_url(query);
        tracing::debug!("Geocoding (free-form): {} -> {}", query, url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status().as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        parse_response(body)
    }
}

/// Parse a decimal degree, rejecting NaN, infinities and values beyond `bound`.
fn parse_coordinate(raw: &str, axis: &str, bound: f64) -> Result<f64, GeocodeError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && value.abs() <= bound)
        .ok_or_else(|| GeocodeError::Parse {
            message: format!("Invalid {} '{}'", axis, raw),
        })
}

/// Interpret a Nominatim JSON payload: an array whose first element wins.
fn parse_response(body: serde_json::Value) -> Result<Option<GeocodedPlace>, GeocodeError> {
    let results: Vec<NominatimResponse> =
        serde_json::from_value(body).map_err(|e| GeocodeError::Parse {
            message: format!("Unexpected Nominatim payload: {}", e),
        })?;

    let Some(first) = results.into_iter().next() else {
        return Ok(None);
    };

    let latitude = parse_coordinate(&first.lat, "latitude", 90.0)?;
    let longitude = parse_coordinate(&first.lon, "longitude", 180.0)?;

    Ok(Some(GeocodedPlace {
        display_name: first.display_name,
        latitude,
        longitude,
    }))
}
