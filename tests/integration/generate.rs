//! Successful generation runs.

use predicates::prelude::*;
use weightsplice::test_utils::{TemplateFixture, fixtures};

use crate::common::{TestProject, shipped_template};

/// The documented example: two records, one with a quote in the token
#[test]
fn test_example_scenario() {
    let project = TestProject::new();
    let template = project.write("binary.py", fixtures::SAMPLE_TEMPLATE);

    project
        .command(&template)
        .write_stdin(fixtures::SAMPLE_INPUT)
        .assert()
        .success()
        .stdout(fixtures::SAMPLE_OUTPUT)
        .stderr(predicate::str::is_empty());
}

/// Entries appear in input order, duplicates included
#[test]
fn test_order_is_preserved() {
    let project = TestProject::new();
    let template = project.write("t.py", "weights = {}\n");

    project
        .command(&template)
        .write_stdin("w\tt\n3\tzeta\n1\talpha\n2\tmid\n1\talpha\n")
        .assert()
        .success()
        .stdout(
            "weights = {\n    \"zeta\": 3,\n    \"alpha\": 1,\n    \"mid\": 2,\n    \"alpha\": 1,\n}\n",
        );
}

/// Header-only input still produces the opening and closing lines
#[test]
fn test_empty_table() {
    let project = TestProject::new();
    let template = project.write("t.py", "a\nweights = {}\nb\n");

    project
        .command(&template)
        .write_stdin("header only\n")
        .assert()
        .success()
        .stdout("a\nweights = {\n}\nb\n");
}

/// Weights are copied verbatim, tokens only get their quotes escaped
#[test]
fn test_weights_verbatim_tokens_escaped() {
    let project = TestProject::new();
    let template = project.write("t.py", "weights = {}\n");

    project
        .command(&template)
        .write_stdin("h\n-1.5e-07\tsay \"hi\"\n0x1F\tback\\slash\n")
        .assert()
        .success()
        .stdout(
            "weights = {\n    \"say \\\"hi\\\"\": -1.5e-07,\n    \"back\\slash\": 0x1F,\n}\n",
        );
}

/// CRLF line endings in the input are stripped like LF
#[test]
fn test_crlf_input() {
    let project = TestProject::new();
    let template = project.write("t.py", "weights = {}\n");

    project
        .command(&template)
        .write_stdin("header\r\n0.5\tfoo\r\n")
        .assert()
        .success()
        .stdout("weights = {\n    \"foo\": 0.5,\n}\n");
}

/// Lines around the marker are preserved byte-for-byte
#[test]
fn test_surrounding_lines_preserved() {
    let project = TestProject::new();
    let template = project.write(
        "t.py",
        "#!/usr/bin/env python\r\n\n   indented = 1  \nweights = {}\n\ttail\nlast line without newline",
    );

    project
        .command(&template)
        .write_stdin("h\n1\tx\n")
        .assert()
        .success()
        .stdout(
            "#!/usr/bin/env python\r\n\n   indented = 1  \nweights = {\n    \"x\": 1,\n}\n\ttail\nlast line without newline",
        );
}

/// No marker: template copied unchanged, a warning on stderr, still success
#[test]
fn test_missing_marker_is_not_an_error() {
    let project = TestProject::new();
    let fixture = TemplateFixture::without_marker();
    let template = fixture.write_to(project.path()).unwrap();

    project
        .command(&template)
        .write_stdin(fixtures::SAMPLE_INPUT)
        .assert()
        .success()
        .stdout(fixture.content.clone())
        .stderr(predicate::str::contains("No line starting with"));
}

/// Every marker-prefixed line is replaced
#[test]
fn test_repeated_markers() {
    let project = TestProject::new();
    let template = project.write("t.py", "weights = {}\n--\nweights = {}  # again\n");

    project
        .command(&template)
        .write_stdin("h\n1\ta\n")
        .assert()
        .success()
        .stdout("weights = {\n    \"a\": 1,\n}\n--\nweights = {\n    \"a\": 1,\n}\n")
        .stderr(predicate::str::contains("found again"));
}

/// --quiet silences the missing-marker warning
#[test]
fn test_quiet_suppresses_warnings() {
    let project = TestProject::new();
    let template = project.write("plain.py", "x = 1\n");

    project
        .command(&template)
        .arg("--quiet")
        .write_stdin("h\n")
        .assert()
        .success()
        .stdout("x = 1\n")
        .stderr(predicate::str::is_empty());
}

/// --verbose logs to stderr and leaves stdout untouched
#[test]
fn test_verbose_logs_to_stderr_only() {
    let project = TestProject::new();
    let template = project.write("binary.py", fixtures::SAMPLE_TEMPLATE);

    project
        .command(&template)
        .arg("--verbose")
        .write_stdin(fixtures::SAMPLE_INPUT)
        .assert()
        .success()
        .stdout(fixtures::SAMPLE_OUTPUT)
        .stderr(predicate::str::contains("Parsed 2 record(s) from input"));
}

/// The shipped Python template has exactly one marker
#[test]
fn test_shipped_template() {
    let project = TestProject::new();

    project
        .command(&shipped_template())
        .write_stdin(fixtures::SAMPLE_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "weights = {\n    \"foo\": 0.5,\n    \"bar\\\"baz\": 1,\n}\n",
        ))
        .stdout(predicate::str::contains("weights = {}").not())
        .stdout(predicate::str::contains("def classify(features):"));
}
