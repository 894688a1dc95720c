/// Module containing environment configuration helpers
pub mod config;
/// Module containing default-on-failure helpers for presentation code
pub mod fallback;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use fallback::*;
pub use logger::*;
