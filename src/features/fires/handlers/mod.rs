mod fire_handler;

pub use fire_handler::*;
