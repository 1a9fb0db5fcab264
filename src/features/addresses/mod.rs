//! Address registry.
//!
//! An address belongs to one city (and through it one state) and may have
//! any number of people recorded as its owners.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AddressService;
