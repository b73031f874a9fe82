//! Column resolution and per-row record extraction.
//!
//! Columns are looked up by header name once, before the first row, and every
//! row is then reduced to a [`CommentRecord`] by position.

use anyhow::{Result, anyhow, bail};

/// One row of the comments file, reduced to the two fields the runner uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    /// Repository folder name, relative to the repos root.
    pub id: String,
    /// Feedback text posted as the PR comment body.
    pub comment: String,
}

/// Header positions of the id and feedback columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub id: usize,
    pub feedback: usize,
}

impl ColumnMap {
    /// Build a record from the fields of one row.
    ///
    /// Errors if the row is shorter than the resolved column positions.
    pub fn extract(&self, fields: &[&str]) -> Result<CommentRecord> {
        let field = |index: usize| {
            fields.get(index).copied().ok_or_else(|| {
                anyhow!(
                    "row has {} fields, expected at least {}",
                    fields.len(),
                    index + 1
                )
            })
        };
        Ok(CommentRecord {
            id: field(self.id)?.to_string(),
            comment: field(self.feedback)?.to_string(),
        })
    }
}

/// Resolve the id and feedback columns against the header row.
///
/// Names match exactly (case-sensitive). If a name appears more than once the
/// first occurrence wins. All missing names are reported together.
pub fn resolve_columns(
    headers: &[&str],
    id_column: &str,
    feedback_column: &str,
) -> Result<ColumnMap> {
    let position = |name: &str| headers.iter().position(|header| *header == name);

    let id = position(id_column);
    let feedback = position(feedback_column);
    match (id, feedback) {
        (Some(id), Some(feedback)) => Ok(ColumnMap { id, feedback }),
        _ => {
            let mut missing = Vec::new();
            if id.is_none() {
                missing.push(format!("\"{id_column}\""));
            }
            if feedback.is_none() {
                missing.push(format!("\"{feedback_column}\""));
            }
            bail!(
                "missing column {} (available: {})",
                missing.join(", "),
                headers.join(", ")
            )
        }
    }
}
