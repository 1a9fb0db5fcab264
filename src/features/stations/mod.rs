//! Station registry: a station belongs to a department and sits at an address.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::StationService;
