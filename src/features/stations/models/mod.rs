mod station;

pub use station::StationDetail;
