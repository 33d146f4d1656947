use crate::utils::{Workspace, arg};
use assert_cmd::cargo::cargo_bin_cmd;

/// Precondition: A file has two `user.` attributes.
/// Action: Run `lxattr list` on it.
/// Expectation: Both names are printed under the file header.
#[test]
fn list_names() {
    let Some(ws) = Workspace::new("list_names") else {
        return;
    };
    let file = ws.file("a.txt", &[("user.a", b"1")]);

    let mut cmd = cargo_bin_cmd!("lxattr");
    let assert = cmd.args(["list", arg(&file)]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(Some(format!("# file: {}", file.display()).as_str()), lines.next());
    assert!(stdout.lines().any(|line| line == "user.a"));
    assert!(stdout.ends_with("\n\n"));
}

/// Precondition: A file has no `user.` attributes.
/// Action: Run `lxattr list` on it.
/// Expectation: The command succeeds and prints no `user.` names.
#[test]
fn list_without_attributes() {
    let Some(ws) = Workspace::new("list_empty") else {
        return;
    };
    let file = ws.file("a.txt", &[]);

    let mut cmd = cargo_bin_cmd!("lxattr");
    let assert = cmd.args(["list", arg(&file)]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.lines().any(|line| line.starts_with("user.")));
}

/// Precondition: The second path does not exist.
/// Action: Run `lxattr list` with both paths.
/// Expectation: The command fails.
#[test]
fn list_missing_file() {
    let Some(ws) = Workspace::new("list_missing") else {
        return;
    };
    let file = ws.file("a.txt", &[]);
    let missing = ws.path().join("missing.txt");

    let mut cmd = cargo_bin_cmd!("lxattr");
    cmd.args(["list", arg(&file), arg(&missing)])
        .assert()
        .failure();
}
