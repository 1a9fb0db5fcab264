pub mod addresses;
pub mod admin;
pub mod fires;
pub mod geocodes;
pub mod people;
pub mod reference;
pub mod stations;
