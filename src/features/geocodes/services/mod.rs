mod geocoding_service;

#[cfg(test)]
pub(crate) use geocoding_service::test_support;
pub use geocoding_service::{GeocodeFailure, GeocodeOutcome, GeocodingService};
