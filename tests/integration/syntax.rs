//! Custom syntax profiles.

use weightsplice::test_utils::fixtures;

use crate::common::TestProject;

#[test]
fn test_rust_slice_profile() {
    let project = TestProject::new();
    let template = project.write(
        "weights.rs.in",
        "// @generated\npub static WEIGHTS: &[(&str, f64)] = &[];\n",
    );
    let profile = project.write(
        "rust.toml",
        r#"marker = "pub static WEIGHTS"
open = "pub static WEIGHTS: &[(&str, f64)] = &["
entry = "    (\"{{ key }}\", {{ value }}),"
close = "];"
"#,
    );

    project
        .command(&template)
        .arg("--syntax")
        .arg(&profile)
        .write_stdin(fixtures::SAMPLE_INPUT)
        .assert()
        .success()
        .stdout(
            "// @generated\npub static WEIGHTS: &[(&str, f64)] = &[\n    (\"foo\", 0.5),\n    (\"bar\\\"baz\", 1),\n];\n",
        );
}

/// A profile may override only some keys
#[test]
fn test_partial_profile_keeps_default_entry() {
    let project = TestProject::new();
    let template = project.write("t.js", "// header\nconst WEIGHTS = {};\n");
    let profile = project.write(
        "js.toml",
        "marker = \"const WEIGHTS\"\nopen = \"const WEIGHTS = {\"\nclose = \"};\"\n",
    );

    project
        .command(&template)
        .arg("-s")
        .arg(&profile)
        .write_stdin("h\n2\tk\n")
        .assert()
        .success()
        .stdout("// header\nconst WEIGHTS = {\n    \"k\": 2,\n};\n");
}
