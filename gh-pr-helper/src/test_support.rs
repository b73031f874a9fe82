//! Test-only helpers: a scripted executor and a temporary repos workspace.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

use crate::io::executor::{ExecOutcome, ExecRequest, Executor};
use crate::options::Options;

/// One queued response of a [`ScriptedExecutor`].
#[derive(Debug, Clone)]
pub enum ScriptedExec {
    Outcome(ExecOutcome),
    /// Behave as if the program could not be started.
    SpawnError(String),
}

/// Executor that records every request and replays queued responses.
///
/// Once the queue is empty it answers with the fallback, or errors if there is
/// none.
pub struct ScriptedExecutor {
    queue: RefCell<VecDeque<ScriptedExec>>,
    fallback: Option<ExecOutcome>,
    requests: RefCell<Vec<ExecRequest>>,
}

impl ScriptedExecutor {
    pub fn new(responses: Vec<ScriptedExec>) -> Self {
        Self {
            queue: RefCell::new(responses.into()),
            fallback: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Answer every request with `outcome`.
    pub fn always(outcome: ExecOutcome) -> Self {
        Self {
            fallback: Some(outcome),
            ..Self::new(Vec::new())
        }
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<ExecRequest> {
        self.requests.borrow().clone()
    }
}

impl Executor for ScriptedExecutor {
    fn exec(&self, request: &ExecRequest) -> Result<ExecOutcome> {
        self.requests.borrow_mut().push(request.clone());
        match self.queue.borrow_mut().pop_front() {
            Some(ScriptedExec::Outcome(outcome)) => Ok(outcome),
            Some(ScriptedExec::SpawnError(message)) => Err(anyhow!(message)),
            None => self
                .fallback
                .ok_or_else(|| anyhow!("scripted executor has no response left")),
        }
    }
}

/// Temporary directory holding a `repos/` root and a comments file.
pub struct TestWorkspace {
    temp: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        fs::create_dir(temp.path().join("repos")).context("create repos dir")?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn repos_root(&self) -> PathBuf {
        self.path().join("repos")
    }

    /// Create a repository folder `id` under the repos root.
    pub fn add_repo(&self, id: &str) -> Result<PathBuf> {
        let path = self.repos_root().join(id);
        fs::create_dir_all(&path).with_context(|| format!("create {}", path.display()))?;
        Ok(path)
    }

    /// Write `comments.csv` and return default options pointing at it.
    pub fn with_csv(&self, contents: &str) -> Result<Options> {
        let path = self.path().join("comments.csv");
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(Options::new(self.repos_root(), path))
    }
}
