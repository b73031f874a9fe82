//! Helper for running a child process attached to the terminal.

use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, error, instrument, warn};
use wait_timeout::ChildExt;

/// Exit status of a finished child process.
#[derive(Debug)]
pub struct CommandStatus {
    pub status: ExitStatus,
    pub timed_out: bool,
}

/// Run a command to completion with an optional timeout.
///
/// stdout and stderr are inherited so the child's own messages reach the user
/// unchanged; stdin is closed. Without a timeout the wait is unbounded. On
/// timeout the child is killed and reaped before returning.
#[instrument(skip_all, fields(timeout = ?timeout))]
pub fn run_command(mut cmd: Command, timeout: Option<Duration>) -> Result<CommandStatus> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!("spawning child process");
    let mut child = match cmd.spawn() {
        Ok(c) => c,
        Err(e) => {
            error!(err = %e, "failed to spawn command");
            return Err(e).context("spawn command");
        }
    };

    let mut timed_out = false;
    let status = match timeout {
        None => child.wait().context("wait for command")?,
        Some(timeout) => match child.wait_timeout(timeout).context("wait for command")? {
            Some(status) => status,
            None => {
                warn!(
                    timeout_secs = timeout.as_secs(),
                    "command timed out, killing"
                );
                timed_out = true;
                child.kill().context("kill command")?;
                child.wait().context("wait command after kill")?
            }
        },
    };

    debug!(exit_code = ?status.code(), timed_out, "command finished");
    Ok(CommandStatus { status, timed_out })
}
