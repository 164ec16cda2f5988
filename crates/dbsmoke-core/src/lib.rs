//! One-shot database connectivity check: configuration from the process
//! environment, a single connection attempt, a fixed outcome line.

pub mod config;
pub mod db;
pub mod error;
pub mod report;

pub use error::{CheckError, Result};
