//! Admin registry.
//!
//! The set of admin-managed entities is declared explicitly in
//! [`registry::ADMIN_ENTITIES`]; nothing is discovered at runtime.

pub mod dtos;
pub mod handlers;
pub mod registry;
pub mod routes;
pub mod services;

pub use services::AdminService;
