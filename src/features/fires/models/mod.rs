mod fire;

pub use fire::{fire_url, Fire, FireDetail, FireLink, FireRecord, FireSummary};
