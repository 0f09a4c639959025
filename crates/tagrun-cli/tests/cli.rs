//! End-to-end tests for the `tagrun` binary.

mod common;

use common::{go_source, OutputAssertions, TestContext};
use predicates::prelude::*;

fn two_files() -> TestContext {
    TestContext::new().with_files(&[
        ("a.go", go_source("gomock", &[("A", "key=v1")]).as_str()),
        ("b.go", go_source("gomock", &[("B", "key=v2")]).as_str()),
    ])
}

#[test]
fn test_dry_run_prints_commands_in_walk_order() {
    let ctx = two_files();
    let output = ctx
        .command()
        .args(["-k", "gomock", "-c", "echo @key", "-n"])
        .output()
        .unwrap();

    output.assert_success();
    assert_eq!(output.stdout_lines(), vec!["Running: echo v1", "Running: echo v2"]);
}

#[test]
fn test_commands_run_after_being_announced() {
    let ctx = two_files();
    let output = ctx
        .command()
        .args(["-k", "gomock", "-c", "echo @key"])
        .output()
        .unwrap();

    output.assert_success();
    assert_eq!(
        output.stdout_lines(),
        vec!["Running: echo v1", "v1", "Running: echo v2", "v2"]
    );
}

#[test]
fn test_silent_suppresses_all_output() {
    let ctx = two_files();
    ctx.command()
        .args(["-k", "gomock", "-c", "echo @key", "--silent"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_reserved_placeholders() {
    let ctx = TestContext::new().with_files(&[(
        "pkg/repo.go",
        go_source("gomock", &[("Repo", "out=mock_repo.go")]).as_str(),
    )]);

    ctx.command()
        .args(["-r", "pkg", "-k", "gomock", "-c", "gen -s @path -o @out @type", "--dry-run"])
        .assert()
        .success()
        .stdout("Running: gen -s pkg/repo.go -o mock_repo.go Repo\n");
}

#[test]
fn test_other_keywords_are_ignored() {
    let ctx = TestContext::new().with_files(&[(
        "a.go",
        go_source("gomockx", &[("A", "key=v1")]).as_str(),
    )]);

    ctx.command()
        .args(["-k", "gomock", "-c", "echo @key", "-n"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_keyword_is_a_usage_error() {
    let ctx = two_files();
    let output = ctx.command().args(["-c", "echo @key"]).output().unwrap();

    output.assert_exit_code(2);
    let stderr = output.stderr_text();
    assert!(stderr.contains("missing required option: --keyword"), "stderr: {stderr}");
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_template_is_a_usage_error() {
    let ctx = two_files();
    ctx.command()
        .args(["-k", "gomock"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--cmd"));
}

#[test]
fn test_missing_root_fails() {
    let ctx = TestContext::new();
    ctx.command()
        .args(["-r", "does-not-exist", "-k", "gomock", "-c", "echo @type"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("root not found"));
}

#[test]
fn test_parse_error_does_not_stop_the_run() {
    let ctx = TestContext::new().with_files(&[
        ("a_broken.go", "package sample\n\ntype Broken struct {\n"),
        ("b.go", go_source("gomock", &[("B", "key=v2")]).as_str()),
    ]);

    let output = ctx
        .command()
        .args(["-k", "gomock", "-c", "echo @key", "-n"])
        .output()
        .unwrap();

    output.assert_success();
    assert_eq!(output.stdout_lines(), vec!["Running: echo v2"]);
    assert!(output.stderr_text().contains("Error parsing"));
}

#[cfg(unix)]
#[test]
fn test_failed_command_does_not_stop_the_run() {
    let ctx = TestContext::new().with_files(&[
        ("a.go", go_source("gomock", &[("A", "tool=false")]).as_str()),
        ("b.go", go_source("gomock", &[("B", "tool=touch")]).as_str()),
    ]);

    let output = ctx
        .command()
        .args(["-k", "gomock", "-c", "@tool @type.out"])
        .output()
        .unwrap();

    output.assert_success();
    assert!(output.stderr_text().contains("Error running command for A"));
    assert!(!ctx.path().join("A.out").exists());
    assert!(ctx.path().join("B.out").is_file());
}

#[test]
fn test_skip_directories() {
    let ctx = TestContext::new().with_files(&[
        ("a.go", go_source("gomock", &[("A", "key=kept")]).as_str()),
        ("vendor/v.go", go_source("gomock", &[("V", "key=vendored")]).as_str()),
        ("gen/g.go", go_source("gomock", &[("G", "key=generated")]).as_str()),
    ]);

    let output = ctx
        .command()
        .args(["-k", "gomock", "-c", "echo @key", "-n", "--skip", "gen"])
        .output()
        .unwrap();

    output.assert_success();
    assert_eq!(output.stdout_lines(), vec!["Running: echo kept"]);
}

#[test]
fn test_config_file_supplies_required_values() {
    let ctx = two_files().with_config("keyword: gomock\ncmd: echo @key\ndry_run: true\n");

    let output = ctx.command().output().unwrap();

    output.assert_success();
    assert_eq!(output.stdout_lines(), vec!["Running: echo v1", "Running: echo v2"]);
}

#[test]
fn test_flags_override_config_file() {
    let ctx = two_files().with_config("keyword: other\ncmd: echo nope\n");

    let output = ctx
        .command()
        .args(["-k", "gomock", "-c", "echo @key", "-n"])
        .output()
        .unwrap();

    output.assert_success();
    assert_eq!(output.stdout_lines(), vec!["Running: echo v1", "Running: echo v2"]);
}

#[test]
fn test_environment_supplies_required_values() {
    let ctx = two_files();
    let output = ctx
        .command()
        .env("TAGRUN_KEYWORD", "gomock")
        .env("TAGRUN_CMD", "echo @key")
        .arg("-n")
        .output()
        .unwrap();

    output.assert_success();
    assert_eq!(output.stdout_lines(), vec!["Running: echo v1", "Running: echo v2"]);
}

#[test]
fn test_explicit_config_must_exist() {
    let ctx = two_files();
    ctx.command()
        .args(["--config", "missing.yaml", "-k", "gomock", "-c", "echo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_version() {
    let ctx = TestContext::new();
    ctx.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tagrun "));
}
