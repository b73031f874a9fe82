//! Resolution of a record id to a repository folder under the repos root.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Why an id cannot be used as a folder under the repos root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdRejection {
    /// Empty or whitespace-only id.
    Blank,
    /// Absolute path, or a drive/root prefix.
    Absolute,
    /// Contains a `..` component.
    ParentTraversal,
}

impl fmt::Display for IdRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str("id is blank"),
            Self::Absolute => f.write_str("id must be a relative path"),
            Self::ParentTraversal => f.write_str("id must not contain '..'"),
        }
    }
}

/// Join `id` under `root`, refusing ids that would leave the root.
///
/// Nested ids such as `org/repo` are allowed. Does not touch the filesystem.
pub fn resolve_repo_path(root: &Path, id: &str) -> Result<PathBuf, IdRejection> {
    if id.trim().is_empty() {
        return Err(IdRejection::Blank);
    }
    for component in Path::new(id).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err(IdRejection::ParentTraversal),
            Component::RootDir | Component::Prefix(_) => return Err(IdRejection::Absolute),
        }
    }
    Ok(root.join(id))
}
