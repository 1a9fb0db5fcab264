pub mod fire_service;

pub use fire_service::FireService;
