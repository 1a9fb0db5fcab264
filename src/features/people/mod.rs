//! People and the roles they play in fire records.
//!
//! A person may own addresses, be injured in fires (as a victim) or supply
//! information about fires (as a source).

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::PgPersonRepository;
pub use services::PeopleService;
