//! Shared runtime helpers: logging setup and environment checks.

pub mod utils;
pub mod env;
