//! Geocoding provider clients.
//!
//! A provider turns a free-text address into a normalized address string and
//! a coordinate pair. "No match" is a normal answer (`Ok(None)`); transport
//! and payload problems are reported as [`GeocodeError`].

mod nominatim_client;

pub use nominatim_client::NominatimClient;

use async_trait::async_trait;
use thiserror::Error;

/// A place returned by a geocoding provider.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    /// The provider's normalized form of the queried address.
    pub display_name: String,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
}

/// Errors from a geocoding provider.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed or timed out.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("Provider returned status {0}")]
    Status(u16),

    /// Response body could not be interpreted.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },
}

/// Seam for geocoding providers.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Look up a free-text address. Makes a single attempt.
    async fn lookup(&self, query: &str) -> Result<Option<GeocodedPlace>, GeocodeError>;
}
