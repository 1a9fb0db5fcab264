//! Reference (lookup) data: states, cities, departments, titles, causes,
//! injuries and story links.
//!
//! These records carry no behaviour beyond display formatting. Slugs are
//! derived server-side from the display name on insert.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReferenceService;
