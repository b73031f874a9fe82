//! I/O helpers for the batch runner.

pub mod config;
pub mod csv_source;
pub mod executor;
pub mod process;
