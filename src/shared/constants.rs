/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Path prefix shared by every public and admin route
pub const ROUTE_PREFIX: &str = "/firestarter";
