//! The batch loop: one `gh pr comment` per CSV row, strictly in file order.
//!
//! Each row is fully handled, including waiting for the external process, before
//! the next row is read. A row whose repository folder is missing is skipped; a
//! failed invocation is reported and counted. Neither stops the run. Only
//! problems with the input itself (missing file, missing column, malformed CSV)
//! abort it.
//!
//! Nothing is remembered between runs: running the same file twice comments
//! twice.

use std::io::Write;

use anyhow::{Result, bail};
use tracing::{debug, info, instrument, warn};

use crate::core::command::CommentCommand;
use crate::core::record::CommentRecord;
use crate::core::repo_path::resolve_repo_path;
use crate::core::summary::{RowOutcome, RunSummary};
use crate::io::config::HelperConfig;
use crate::io::csv_source::CommentReader;
use crate::io::executor::{ExecRequest, Executor};
use crate::options::Options;

/// Process every record of `options.comments_csv`.
///
/// Console lines go to `out`. Returns the run summary; its
/// [`RunSummary::exit_code`] reflects failed invocations.
#[instrument(skip_all, fields(comments_csv = %options.comments_csv.display(), dry_run = options.dry_run))]
pub fn run_batch<E: Executor, W: Write>(
    options: &Options,
    config: &HelperConfig,
    executor: &E,
    out: &mut W,
) -> Result<RunSummary> {
    if !options.comments_csv.is_file() {
        bail!(
            "comments csv file ({}) does not exist",
            options.comments_csv.display()
        );
    }

    let reader = CommentReader::open(
        &options.comments_csv,
        &config.csv.format(),
        &options.id_column,
        &options.feedback_column,
    )?;
    info!(repos_root = %options.repos_root.display(), "processing comments");

    let mut summary = RunSummary::default();
    for (index, record) in reader.enumerate() {
        let record = record?;
        let counter = index + 1;
        writeln!(out, "{counter}: {}: {}", record.id, record.comment)?;

        let outcome = process_record(&record, options, config, executor, out)?;
        debug!(counter, id = %record.id, ?outcome, "row processed");
        summary.record(outcome);
    }

    writeln!(out, "{summary}")?;
    info!(
        rows = summary.rows,
        failed = summary.failed,
        skipped = summary.skipped,
        "run finished"
    );
    Ok(summary)
}

fn process_record<E: Executor, W: Write>(
    record: &CommentRecord,
    options: &Options,
    config: &HelperConfig,
    executor: &E,
    out: &mut W,
) -> Result<RowOutcome> {
    let path = match resolve_repo_path(&options.repos_root, &record.id) {
        Ok(path) => path,
        Err(rejection) => {
            warn!(id = %record.id, %rejection, "invalid repo id");
            writeln!(out, "\t invalid repo id \"{}\": {rejection}", record.id)?;
            return Ok(RowOutcome::InvalidId);
        }
    };

    if !path.is_dir() {
        writeln!(
            out,
            "Directory for answer repo ({}) does not exist.",
            path.display()
        )?;
        return Ok(RowOutcome::MissingDirectory);
    }

    let command = CommentCommand::new(config.gh_program.as_str(), record.comment.as_str());
    if options.dry_run {
        writeln!(
            out,
            "\t would run: {} on path {}",
            command.describe(),
            path.display()
        )?;
        return Ok(RowOutcome::Listed);
    }

    let request = ExecRequest::comment(&command, &path, config.timeout());
    match executor.exec(&request) {
        Ok(outcome) if outcome.success() => Ok(RowOutcome::Commented),
        Ok(outcome) => {
            warn!(id = %record.id, %outcome, "comment command failed");
            writeln!(out, "\t {} {outcome}", config.gh_program)?;
            Ok(RowOutcome::Failed)
        }
        Err(err) => {
            warn!(id = %record.id, err = %format!("{err:#}"), "comment command did not run");
            writeln!(out, "\t {} failed to start: {err:#}", config.gh_program)?;
            Ok(RowOutcome::Failed)
        }
    }
}
