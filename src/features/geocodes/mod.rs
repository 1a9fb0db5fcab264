//! Address-to-coordinate resolution.
//!
//! A geocode is one resolution attempt for one address. Attempts are never
//! shared or deduplicated: each save that needs coordinates gets a fresh
//! record, successful or not.

pub mod models;
pub mod services;

pub use services::GeocodingService;
