//! Fire incidents.
//!
//! A fire is recorded at one address and carries at most one geocode. Saving
//! a fire without a geocode resolves its location first.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::PgFireRepository;
pub use services::FireService;
