//! CLI tests for the `gh-pr-helper` binary.
//!
//! Spawns the binary and verifies exit codes and console output for missing
//! input, dry-run, and real invocations through stand-in programs.

use std::fs;
use std::process::{Command, Output};

use gh_pr_helper::exit_codes;
use gh_pr_helper::test_support::TestWorkspace;

fn helper(ws: &TestWorkspace, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gh-pr-helper"))
        .current_dir(ws.path())
        .args(args)
        .output()
        .expect("run gh-pr-helper")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_csv_exits_invalid_and_names_path() {
    let ws = TestWorkspace::new().expect("workspace");

    let output = helper(&ws, &["-r", "repos", "-c", "nope.csv"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stderr(&output).contains("comments csv file (nope.csv) does not exist"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_comments_flag_is_a_usage_error() {
    let ws = TestWorkspace::new().expect("workspace");

    let output = helper(&ws, &["--list"]);

    assert_eq!(output.status.code(), Some(exit_codes::USAGE));
    assert!(stderr(&output).contains("--comments-csv"));
}

#[test]
fn dry_run_lists_and_exits_ok() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.add_repo("abc").expect("repo");
    ws.with_csv("id;comment\nabc;Nice work\nmissing;Also good\n")
        .expect("csv");

    // A program that cannot exist proves nothing was spawned.
    let output = helper(
        &ws,
        &[
            "-r",
            "repos",
            "-c",
            "comments.csv",
            "--list",
            "--gh-program",
            "/nonexistent/gh",
        ],
    );

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let out = stdout(&output);
    assert!(out.contains("1: abc: Nice work"));
    assert!(out.contains("would run: /nonexistent/gh pr comment --body \"Nice work\" on path"));
    assert!(out.contains("2: missing: Also good"));
    assert!(out.contains("does not exist."));
    assert!(out.contains("done: rows=2 commented=0 listed=1 skipped=1 failed=0"));
}

#[test]
fn missing_column_exits_invalid() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.add_repo("abc").expect("repo");
    ws.with_csv("id;comment\nabc;Nice work\n").expect("csv");

    let output = helper(
        &ws,
        &["-r", "repos", "-c", "comments.csv", "-f", "feedback", "-l"],
    );

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stderr(&output).contains("missing column \"feedback\""));
}

#[test]
fn unstartable_program_exits_comment_failed() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.add_repo("abc").expect("repo");
    ws.with_csv("id;comment\nabc;Nice work\n").expect("csv");

    let output = helper(
        &ws,
        &[
            "-r",
            "repos",
            "-c",
            "comments.csv",
            "--gh-program",
            "/nonexistent/gh",
        ],
    );

    assert_eq!(output.status.code(), Some(exit_codes::COMMENT_FAILED));
    assert!(stdout(&output).contains("failed to start"));
}

#[cfg(unix)]
#[test]
fn stand_in_program_outcomes_set_exit_code() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.add_repo("abc").expect("repo");
    ws.with_csv("id;comment\nabc;Nice work\n").expect("csv");
    let base = ["-r", "repos", "-c", "comments.csv", "--gh-program"];

    let ok = helper(&ws, &[&base[..], &["true"][..]].concat());
    assert_eq!(ok.status.code(), Some(exit_codes::OK));
    assert!(stdout(&ok).contains("commented=1"));

    let failed = helper(&ws, &[&base[..], &["false"][..]].concat());
    assert_eq!(failed.status.code(), Some(exit_codes::COMMENT_FAILED));
    assert!(stdout(&failed).contains("\t false exited with status 1"));
}

#[cfg(unix)]
#[test]
fn stand_in_program_receives_body_in_repo_folder() {
    let ws = TestWorkspace::new().expect("workspace");
    let repo = ws.add_repo("abc").expect("repo");
    ws.with_csv("id;comment\nabc;\"Good; \"\"solid\"\" work\"\n")
        .expect("csv");

    // With `sh` as the program, `sh pr comment --body <text>` runs the script
    // `pr` found in the repo folder, which records the remaining arguments.
    fs::write(repo.join("pr"), "printf '%s\\n' \"$@\" > args.txt\n").expect("write script");

    let output = helper(
        &ws,
        &["-r", "repos", "-c", "comments.csv", "--gh-program", "sh"],
    );

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let args = fs::read_to_string(repo.join("args.txt")).expect("args written in repo folder");
    assert_eq!(args, "comment\n--body\nGood; \"solid\" work\n");
}

#[test]
fn config_file_changes_csv_format() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.add_repo("abc").expect("repo");
    ws.with_csv("id,comment\nabc,\"kept quotes\"\n").expect("csv");
    fs::write(
        ws.path().join("helper.toml"),
        "gh_program = \"hub\"\n\n[csv]\ndelimiter = \",\"\nquoting = false\n",
    )
    .expect("write config");

    let output = helper(
        &ws,
        &[
            "-r",
            "repos",
            "-c",
            "comments.csv",
            "--config",
            "helper.toml",
            "-l",
        ],
    );

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("would run: hub pr comment --body \"\"kept quotes\"\" on path"));
}
