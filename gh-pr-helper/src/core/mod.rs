//! Deterministic, pure logic shared by the batch runner.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values (header names, ids, feedback text) and return deterministic outputs
//! suitable for tests.

pub mod command;
pub mod record;
pub mod repo_path;
pub mod summary;
