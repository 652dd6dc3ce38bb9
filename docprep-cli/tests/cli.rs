use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fixture_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("fixture file");
    }
    dir
}

#[test]
fn process_document_via_cli() {
    let dir = fixture_dir(&[
        ("doc.md", "intro\n#include \"body.txt\"\n%% note\nend\n"),
        ("body.txt", "line1\n## hidden\nline2\n"),
    ]);

    let mut cmd = cargo_bin_cmd!("docprep");
    cmd.current_dir(dir.path()).arg("doc.md").arg("out.md");
    cmd.assert().success();

    let output = fs::read_to_string(dir.path().join("out.md")).unwrap();
    assert_eq!(output, "intro\nline1\nline2\nend\n");
}

#[test]
fn includes_resolve_against_working_directory() {
    let dir = fixture_dir(&[("part.md", "from cwd\n")]);
    let nested = dir.path().join("src");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("doc.md"), "#include \"part.md\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("docprep");
    cmd.current_dir(dir.path()).arg("src/doc.md").arg("out.md");
    cmd.assert().success();

    let output = fs::read_to_string(dir.path().join("out.md")).unwrap();
    assert_eq!(output, "from cwd\n");
}

#[test]
fn missing_input_fails() {
    let dir = fixture_dir(&[]);

    let mut cmd = cargo_bin_cmd!("docprep");
    cmd.current_dir(dir.path()).arg("absent.md").arg("out.md");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("absent.md"));

    assert!(!dir.path().join("out.md").exists());
}

#[test]
fn missing_include_fails_with_partial_output() {
    let dir = fixture_dir(&[("doc.md", "kept\n#include \"gone.md\"\nlost\n")]);

    let mut cmd = cargo_bin_cmd!("docprep");
    cmd.current_dir(dir.path()).arg("doc.md").arg("out.md");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("gone.md"));

    let output = fs::read_to_string(dir.path().join("out.md")).unwrap();
    assert_eq!(output, "kept\n");
}

#[test]
fn unquoted_include_fails() {
    let dir = fixture_dir(&[("doc.md", "#include nofile\n")]);

    let mut cmd = cargo_bin_cmd!("docprep");
    cmd.current_dir(dir.path()).arg("doc.md").arg("out.md");
    cmd.assert().failure().code(1).stderr(
        predicate::str::contains("malformed include directive on line 1")
            .and(predicate::str::contains("nofile")),
    );
}

#[test]
fn missing_arguments_print_help() {
    let mut cmd = cargo_bin_cmd!("docprep");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn configured_log_level_reports_summary() {
    let dir = fixture_dir(&[
        ("doc.md", "text\n"),
        ("docprep.toml", "[logging]\nlevel = \"info\"\n"),
    ]);

    let mut cmd = cargo_bin_cmd!("docprep");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("doc.md")
        .arg("out.md");
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("document processed"));
}

#[test]
fn broken_config_file_falls_back_to_defaults() {
    let dir = fixture_dir(&[("doc.md", "text\n"), ("docprep.toml", "[logging\n")]);

    let mut cmd = cargo_bin_cmd!("docprep");
    cmd.current_dir(dir.path()).arg("doc.md").arg("out.md");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Warning: ignoring docprep.toml"));

    let output = fs::read_to_string(dir.path().join("out.md")).unwrap();
    assert_eq!(output, "text\n");
}
