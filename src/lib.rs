pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod language;
pub mod output;
pub mod scanner;
pub mod stats;

pub use error::{CodeShapeError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
