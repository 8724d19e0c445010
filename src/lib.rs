//! Loot filter configuration: a built-in rule catalog, persisted user edits
//! reconciled against it, and a compiler to rule-file text.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod compiler;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod reconcile;
pub mod session;
pub mod store;

pub use error::{FilterForgeError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
