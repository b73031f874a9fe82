//! Batch pull-request commenting over a set of local repository checkouts.
//!
//! A semicolon-delimited CSV file maps repository folder names to feedback
//! text. For every row the helper runs `gh pr comment --body <feedback>` inside
//! the matching folder, one row at a time and strictly in file order.
//!
//! - **[`core`]**: Pure, deterministic logic (column resolution, id checks,
//!   command construction, run accounting). No I/O.
//! - **[`io`]**: Side-effecting operations (CSV reading, config loading,
//!   process execution). Isolated so tests can swap the executor.
//!
//! [`batch`] coordinates the two to implement the CLI.

pub mod batch;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod options;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
