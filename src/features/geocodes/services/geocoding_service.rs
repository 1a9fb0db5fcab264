use std::sync::Arc;

use crate::features::addresses::models::AddressDetail;
use crate::features::geocodes::models::NewGeocode;
use crate::modules::geocoding::Geocoder;

/// Column width of `geocodes.computed_address`
const COMPUTED_ADDRESS_MAX_CHARS: usize = 255;

/// Why an address could not be resolved
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeFailure {
    /// There was no address to resolve
    MissingAddress,
    /// The provider answered but found nothing
    NoMatch,
    /// The provider could not be reached or answered with garbage
    Provider(String),
}

impl std::fmt::Display for GeocodeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeocodeFailure::MissingAddress => write!(f, "no address to geocode"),
            GeocodeFailure::NoMatch => write!(f, "no match"),
            GeocodeFailure::Provider(reason) => write!(f, "provider error: {}", reason),
        }
    }
}

/// Result of a single resolution attempt
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    Resolved {
        computed_address: String,
        latitude: f64,
        longitude: f64,
    },
    Failed(GeocodeFailure),
}

impl GeocodeOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, GeocodeOutcome::Resolved { .. })
    }

    /// Build the record to persist for this attempt
    pub fn into_new_geocode(self, address_id: Option<i64>) -> NewGeocode {
        match self {
            GeocodeOutcome::Resolved {
                computed_address,
                latitude,
                longitude,
            } => NewGeocode {
                address_id,
                computed_address: Some(computed_address),
                latitude: Some(latitude),
                longitude: Some(longitude),
                geocode_error: false,
            },
            GeocodeOutcome::Failed(_) => NewGeocode {
                address_id,
                computed_address: None,
                latitude: None,
                longitude: None,
                geocode_error: true,
            },
        }
    }
}

/// Resolves addresses to coordinates through a [`Geocoder`] provider.
///
/// Every failure mode is captured in [`GeocodeOutcome::Failed`]; nothing is
/// propagated to the caller and nothing is retried.
pub struct GeocodingService {
    geocoder: Arc<dyn Geocoder>,
}

impl GeocodingService {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder }
    }

    pub async fn resolve(&self, address: Option<&AddressDetail>) -> GeocodeOutcome {
        let Some(address) = address else {
            tracing::warn!("Geocoding skipped: no address");
            return GeocodeOutcome::Failed(GeocodeFailure::MissingAddress);
        };

        let query = address.geocoding_query();

        match self.geocoder.lookup(&query).await {
            Ok(Some(place)) => {
                tracing::debug!(
                    "Geocoded address {} '{}' -> ({}, {})",
                    address.id,
                    query,
                    place.latitude,
                    place.longitude
                );
                GeocodeOutcome::Resolved {
                    computed_address: place
                        .display_name
                        .chars()
                        .take(COMPUTED_ADDRESS_MAX_CHARS)
                        .collect(),
                    latitude: place.latitude,
                    longitude: place.longitude,
                }
            }
            Ok(None) => {
                tracing::warn!("Geocoding found no match for address {} '{}'", address.id, query);
                GeocodeOutcome::Failed(GeocodeFailure::NoMatch)
            }
            Err(e) => {
                tracing::warn!("Geocoding failed for address {} '{}': {}", address.id, query, e);
                GeocodeOutcome::Failed(GeocodeFailure::Provider(e.to_string()))
            }
        }
    }

    /// Resolve an address and turn the outcome into a record ready to insert
    pub async fn resolve_new_geocode(&self, address: Option<&AddressDetail>) -> NewGeocode {
        let address_id = address.map(|a| a.id);
        self.resolve(address).await.into_new_geocode(address_id)
    }
}
