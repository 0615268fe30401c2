pub mod commands;
pub mod input;
pub mod util;

pub const COLLATZ_VERSION_MESSAGE: &str = concat!("v", env!("CARGO_PKG_VERSION"));
