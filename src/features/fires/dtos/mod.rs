mod fire_dto;

pub use fire_dto::*;
