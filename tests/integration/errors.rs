//! Failing runs: every error exits with status 1 and writes nothing to stdout.

use predicates::prelude::*;
use weightsplice::test_utils::{TemplateFixture, fixtures};

use crate::common::TestProject;

/// A data line without a tab aborts the run before any output
#[test]
fn test_malformed_line() {
    let project = TestProject::new();
    let template = TemplateFixture::sample().write_to(project.path()).unwrap();

    project
        .command(&template)
        .write_stdin("header\n0.5\tfoo\n0.5 foo\n1\tbar\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed record on input line 3"));
}

/// A blank data line is malformed too
#[test]
fn test_blank_line() {
    let project = TestProject::new();
    let template = TemplateFixture::sample().write_to(project.path()).unwrap();

    project
        .command(&template)
        .write_stdin("header\n1\ta\n\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 3"));
}

/// The header is never validated
#[test]
fn test_header_without_tab_is_fine() {
    let project = TestProject::new();
    let template = TemplateFixture::sample().write_to(project.path()).unwrap();

    project
        .command(&template)
        .write_stdin("not a record\n")
        .assert()
        .success();
}

/// Missing template file
#[test]
fn test_missing_template() {
    let project = TestProject::new();
    let template = project.path().join("absent.py");

    project
        .command(&template)
        .write_stdin(fixtures::SAMPLE_INPUT)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read template"))
        .stderr(predicate::str::contains("--template"));
}

/// An unreadable syntax profile
#[test]
fn test_missing_syntax_profile() {
    let project = TestProject::new();
    let template = TemplateFixture::sample().write_to(project.path()).unwrap();

    project
        .command(&template)
        .arg("--syntax")
        .arg(project.path().join("nope.toml"))
        .write_stdin(fixtures::SAMPLE_INPUT)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid syntax profile"));
}

/// Unknown keys in a profile are rejected
#[test]
fn test_unknown_profile_key() {
    let project = TestProject::new();
    let template = TemplateFixture::sample().write_to(project.path()).unwrap();
    let profile = project.write("bad.toml", "separator = \": \"\n");

    project
        .command(&template)
        .arg("--syntax")
        .arg(&profile)
        .write_stdin(fixtures::SAMPLE_INPUT)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown field"));
}

/// An entry template referencing an unknown variable
#[test]
fn test_bad_entry_template() {
    let project = TestProject::new();
    let template = TemplateFixture::sample().write_to(project.path()).unwrap();
    let profile = project.write("bad.toml", "entry = \"{{ token }}: {{ weight }}\"\n");

    project
        .command(&template)
        .arg("--syntax")
        .arg(&profile)
        .write_stdin(fixtures::SAMPLE_INPUT)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid mapping syntax"));
}
