//! Per-row outcomes and the end-of-run summary.

use std::fmt;

use crate::exit_codes;

/// What happened to a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// `gh` ran and exited successfully.
    Commented,
    /// Dry-run: the command was printed, not run.
    Listed,
    /// The repository folder does not exist.
    MissingDirectory,
    /// The id could not be used as a folder name.
    InvalidId,
    /// `gh` could not be started, exited non-zero, was signaled or timed out.
    Failed,
}

/// Counters accumulated over a run, in file order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub commented: usize,
    pub listed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: RowOutcome) {
        self.rows += 1;
        match outcome {
            RowOutcome::Commented => self.commented += 1,
            RowOutcome::Listed => self.listed += 1,
            RowOutcome::MissingDirectory | RowOutcome::InvalidId => self.skipped += 1,
            RowOutcome::Failed => self.failed += 1,
        }
    }

    /// Skipped rows do not affect the exit code; failed invocations do.
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            exit_codes::COMMENT_FAILED
        } else {
            exit_codes::OK
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "done: rows={} commented={} listed={} skipped={} failed={}",
            self.rows, self.commented, self.listed, self.skipped, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_rows_still_exit_ok() {
        let mut summary = RunSummary::default();
        summary.record(RowOutcome::Commented);
        summary.record(RowOutcome::MissingDirectory);
        summary.record(RowOutcome::InvalidId);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.exit_code(), exit_codes::OK);
    }

    #[test]
    fn any_failure_sets_failure_exit_code() {
        let mut summary = RunSummary::default();
        summary.record(RowOutcome::Commented);
        summary.record(RowOutcome::Failed);
        assert_eq!(summary.exit_code(), exit_codes::COMMENT_FAILED);
    }

    #[test]
    fn display_lists_all_counters() {
        let mut summary = RunSummary::default();
        summary.record(RowOutcome::Listed);
        summary.record(RowOutcome::MissingDirectory);
        assert_eq!(
            summary.to_string(),
            "done: rows=2 commented=0 listed=1 skipped=1 failed=0"
        );
    }
}
