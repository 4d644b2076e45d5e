pub mod aggregator;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod extractor;
pub mod output;
pub mod scanner;
pub mod strategy;
pub mod validator;

pub use error::{LocatorGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
