mod geocode;

pub use geocode::{Geocode, NewGeocode};
