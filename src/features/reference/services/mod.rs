mod reference_service;

pub use reference_service::ReferenceService;
