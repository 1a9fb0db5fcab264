mod address_service;

pub use address_service::{fetch_address_detail, AddressService};
