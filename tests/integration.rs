use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_declare")))
}

fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn fixture_path(name: &str) -> String {
    format!("{}/{}", fixtures_dir(), name)
}

/// Run `declare <mode> fixtures <tmp>` and return the generated file.
fn declare(mode: &str) -> String {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(mode)
        .arg(fixtures_dir())
        .arg(dir.path())
        .assert()
        .success();

    std::fs::read_to_string(dir.path().join(format!("{mode}.go"))).unwrap()
}

// -- generation --

#[test]
fn assert_mode_matches_expected() {
    let expected = std::fs::read_to_string(fixture_path("assert.expected.go")).unwrap();
    assert_eq!(declare("assert"), expected);
}

#[test]
fn expect_mode_uses_errorf() {
    let output = declare("expect");
    assert!(output.contains("package expect\n"));
    assert!(output.contains("// Equal checks that a equals b, and will call t.Errorf if not.\n"));
    assert!(output.contains("func Equal(t *testing.T, a, b interface{}, message string) bool {"));
    assert!(output.contains("\treturn unless.Equal(a, b, func(s string) {"));
    assert!(output.contains("t.Errorf(\"ExpectFailed: %s\\n%s\", message, s)"));
    assert!(!output.contains("t.Fatalf"));
    assert!(!output.contains("AssertFailed"));
}

#[test]
fn blank_line_separated_comment_is_dropped() {
    let output = declare("assert");
    assert!(!output.contains("separated from NotNil"));
    assert!(output.contains("\n\nfunc NotNil(t *testing.T, a interface{}, message string) bool {"));
}

#[test]
fn output_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("assert.go");
    std::fs::write(&target, "stale contents").unwrap();

    cmd()
        .arg("assert")
        .arg(fixtures_dir())
        .arg(dir.path())
        .assert()
        .success();

    let output = std::fs::read_to_string(&target).unwrap();
    assert!(!output.contains("stale contents"));
    assert!(output.starts_with("// Re-implementation"));
}

#[test]
fn creates_missing_target_directory() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("pkg/declare/expect");

    cmd()
        .arg("expect")
        .arg(fixtures_dir())
        .arg(&target)
        .assert()
        .success();

    assert!(target.join("expect.go").exists());
}

#[test]
fn custom_module_path() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("assert")
        .arg(fixtures_dir())
        .arg(dir.path())
        .args(["--module", "example.com/checks"])
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("assert.go")).unwrap();
    assert!(output.contains("\t\"example.com/checks/internal/unless\"\n"));
    assert!(output.contains("\t\"example.com/checks/pkg/run\"\n"));
    assert!(!output.contains("quiteclose"));
}

#[test]
fn custom_inputs_are_read_in_order() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("assert")
        .arg(fixtures_dir())
        .arg(dir.path())
        .args(["-i", "run.go"])
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("assert.go")).unwrap();
    assert!(output.contains("func RunExitCode("));
    assert!(!output.contains("func Equal("));
}

#[test]
fn source_without_declarations_warns() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(src.path().join("unless.go"), "package unless\n").unwrap();

    cmd()
        .arg("expect")
        .arg(src.path())
        .arg(out.path())
        .args(["-i", "unless.go"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: no declarations found"));

    let output = std::fs::read_to_string(out.path().join("expect.go")).unwrap();
    assert!(!output.contains("func "));
    assert!(output.ends_with("///\n"));
}

// -- invocation errors --

#[test]
fn two_arguments_print_usage() {
    cmd()
        .arg("assert")
        .arg(fixtures_dir())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: declare <PACKAGE>"))
        .stdout(predicate::str::contains("t.Errorf"));
}

#[test]
fn too_many_arguments_print_usage() {
    cmd()
        .args(["assert", "a", "b", "c"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: declare <PACKAGE>"));
}

#[test]
fn unknown_mode_prints_usage_before_io() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("require")
        .arg(fixtures_dir())
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: declare <PACKAGE>"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

// -- fatal errors --

#[test]
fn missing_source_file_fails_without_output() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    cmd()
        .arg("assert")
        .arg(src.path())
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));

    assert!(!out.path().join("assert.go").exists());
}

#[test]
fn malformed_declaration_fails_without_output() {
    let out = TempDir::new().unwrap();

    cmd()
        .arg("assert")
        .arg(fixtures_dir())
        .arg(out.path())
        .args(["-i", "unless.go", "-i", "malformed.go"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed declaration"));

    assert!(!out.path().join("assert.go").exists());
}
