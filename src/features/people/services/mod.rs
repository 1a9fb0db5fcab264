pub mod people_service;

pub use people_service::PeopleService;
