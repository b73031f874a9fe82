//! Batch `gh pr comment` runner.
//!
//! Reads a `;`-delimited CSV of repository folder names and feedback text, and
//! posts each feedback as a PR comment from inside the matching folder.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gh_pr_helper::batch::run_batch;
use gh_pr_helper::exit_codes;
use gh_pr_helper::io::config::{HelperConfig, load_optional_config};
use gh_pr_helper::io::executor::ProcessExecutor;
use gh_pr_helper::logging;
use gh_pr_helper::options::{DEFAULT_FEEDBACK_COLUMN, DEFAULT_ID_COLUMN, Options};

#[derive(Parser)]
#[command(
    name = "gh-pr-helper",
    version,
    about = "Post PR comments from a csv file with `gh pr comment`",
    long_about = "Reads comments from the csv file and runs 'gh pr comment --body \"...\"' in each \
                  repo folder. The repos folder must be the base folder for all the repos \
                  mentioned in the csv."
)]
struct Cli {
    /// Repos folder (uses the current folder if none is specified).
    #[arg(short = 'r', long = "repos", value_name = "DIR")]
    repos: Option<PathBuf>,

    /// A `;`-delimited csv file with columns for the repo folder and the comment.
    #[arg(short = 'c', long = "comments-csv", value_name = "FILE")]
    comments_csv: PathBuf,

    /// The repo folder (GitHub account id) column name.
    #[arg(short = 'i', long, value_name = "NAME", default_value = DEFAULT_ID_COLUMN)]
    id_column: String,

    /// The feedback / comment column name.
    #[arg(short = 'f', long, value_name = "NAME", default_value = DEFAULT_FEEDBACK_COLUMN)]
    feedback_column: String,

    /// List only what would happen. Does not run the gh command.
    #[arg(short = 'l', long)]
    list: bool,

    /// TOML config file (gh program, timeout, csv format).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Program to invoke instead of `gh`.
    #[arg(long, value_name = "PROGRAM")]
    gh_program: Option<String>,

    /// Kill a gh invocation after this many seconds.
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = resolve_config(&cli)?;
    let options = resolve_options(cli)?;

    let mut stdout = std::io::stdout().lock();
    let summary = run_batch(&options, &config, &ProcessExecutor, &mut stdout)?;
    stdout.flush().context("flush stdout")?;
    Ok(summary.exit_code())
}

/// Config file values with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<HelperConfig> {
    let mut config = load_optional_config(cli.config.as_deref())?;
    if let Some(program) = &cli.gh_program {
        config.gh_program = program.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout_secs = Some(secs);
    }
    config.validate()?;
    Ok(config)
}

fn resolve_options(cli: Cli) -> Result<Options> {
    let repos_root = match cli.repos {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => std::env::current_dir().context("resolve current directory")?,
    };
    Ok(Options {
        repos_root,
        comments_csv: cli.comments_csv,
        id_column: cli.id_column,
        feedback_column: cli.feedback_column,
        dry_run: cli.list,
    })
}
