//! Stable exit codes for the helper CLI.

/// Every row was handled (rows with a missing directory count as handled).
pub const OK: i32 = 0;
/// Input could not be used: missing CSV file, missing column, parse or config error.
pub const INVALID: i32 = 1;
/// Argument parsing failed. Emitted by clap, listed here for completeness.
pub const USAGE: i32 = 2;
/// The run completed but at least one `gh` invocation failed.
pub const COMMENT_FAILED: i32 = 3;
