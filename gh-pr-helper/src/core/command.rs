//! The `gh pr comment` invocation for one record.

/// Program invoked when neither the CLI nor the config names one.
pub const DEFAULT_PROGRAM: &str = "gh";

/// A comment-posting command: `<program> pr comment --body <feedback>`.
///
/// The feedback is a single argv entry and never passes through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentCommand {
    pub program: String,
    pub feedback: String,
}

impl CommentCommand {
    pub fn new(program: impl Into<String>, feedback: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            feedback: feedback.into(),
        }
    }

    pub fn args(&self) -> Vec<String> {
        vec![
            "pr".to_string(),
            "comment".to_string(),
            "--body".to_string(),
            self.feedback.clone(),
        ]
    }

    /// Human-readable rendering used by dry-run output.
    pub fn describe(&self) -> String {
        format!("{} pr comment --body \"{}\"", self.program, self.feedback)
    }
}
