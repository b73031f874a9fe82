//! Executor abstraction for the external commenting tool.
//!
//! The [`Executor`] trait decouples the batch loop from actually spawning
//! `gh`. Tests use scripted executors that record requests and return
//! predetermined outcomes without spawning processes.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::core::command::CommentCommand;
use crate::io::process::run_command;

/// Parameters for one external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecRequest {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the child process (the repository folder).
    pub workdir: PathBuf,
    /// Maximum time to wait. `None` waits until the child exits.
    pub timeout: Option<Duration>,
}

impl ExecRequest {
    pub fn comment(
        command: &CommentCommand,
        workdir: impl Into<PathBuf>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            program: command.program.clone(),
            args: command.args(),
            workdir: workdir.into(),
            timeout,
        }
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    Exited(i32),
    /// Terminated by a signal (no exit code).
    Signaled,
    /// Killed after exceeding the request timeout.
    TimedOut(Duration),
}

impl ExecOutcome {
    pub fn success(&self) -> bool {
        matches!(self, Self::Exited(0))
    }
}

impl fmt::Display for ExecOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exited with status {code}"),
            Self::Signaled => f.write_str("terminated by signal"),
            Self::TimedOut(timeout) => write!(f, "timed out after {}s", timeout.as_secs()),
        }
    }
}

/// Runs one external invocation and waits for it to finish.
///
/// An `Err` means the process could not be started or waited on.
pub trait Executor {
    fn exec(&self, request: &ExecRequest) -> Result<ExecOutcome>;
}

/// Executor that spawns the requested program as a child process.
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    #[instrument(skip_all, fields(program = %request.program, workdir = %request.workdir.display()))]
    fn exec(&self, request: &ExecRequest) -> Result<ExecOutcome> {
        let mut cmd = Command::new(&request.program);
        cmd.args(&request.args).current_dir(&request.workdir);

        let finished = run_command(cmd, request.timeout)
            .with_context(|| format!("run {}", request.program))?;

        let outcome = match (finished.timed_out, request.timeout, finished.status.code()) {
            (true, Some(timeout), _) => ExecOutcome::TimedOut(timeout),
            (_, _, Some(code)) => ExecOutcome::Exited(code),
            (_, _, None) => ExecOutcome::Signaled,
        };
        debug!(%outcome, "invocation finished");
        Ok(outcome)
    }
}
