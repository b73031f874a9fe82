//! Run options resolved once from the command line.

use std::path::PathBuf;

pub const DEFAULT_ID_COLUMN: &str = "id";
pub const DEFAULT_FEEDBACK_COLUMN: &str = "comment";

/// Immutable per-run options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Folder under which each record id is resolved.
    pub repos_root: PathBuf,
    /// The `;`-delimited comments file.
    pub comments_csv: PathBuf,
    pub id_column: String,
    pub feedback_column: String,
    /// Print what would run instead of running it.
    pub dry_run: bool,
}

impl Options {
    /// Options with default column names and dry-run off.
    pub fn new(repos_root: impl Into<PathBuf>, comments_csv: impl Into<PathBuf>) -> Self {
        Self {
            repos_root: repos_root.into(),
            comments_csv: comments_csv.into(),
            id_column: DEFAULT_ID_COLUMN.to_string(),
            feedback_column: DEFAULT_FEEDBACK_COLUMN.to_string(),
            dry_run: false,
        }
    }
}
