use crate::utils::{Workspace, arg, user_names};
use assert_cmd::cargo::cargo_bin_cmd;
use clap::Parser;
use lxattr_cli::cli;

/// Precondition: A symlink points to a file carrying an attribute.
/// Action: Run `lxattr list` on the symlink.
/// Expectation: The referent's attribute is not listed.
#[test]
fn list_symlink() {
    let Some(ws) = Workspace::new("symlink_list") else {
        return;
    };
    let file = ws.file("a.txt", &[("user.a", b"1")]);
    let link = ws.path().join("link");
    std::os::unix::fs::symlink(&file, &link).unwrap();

    let mut cmd = cargo_bin_cmd!("lxattr");
    let assert = cmd.args(["list", arg(&link)]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.lines().any(|line| line == "user.a"));
}

/// Precondition: A symlink points to a file carrying an attribute.
/// Action: Run `lxattr clear` on the symlink.
/// Expectation: The referent keeps its attribute.
#[test]
fn clear_symlink() {
    let Some(ws) = Workspace::new("symlink_clear") else {
        return;
    };
    let file = ws.file("a.txt", &[("user.a", b"1")]);
    let link = ws.path().join("link");
    std::os::unix::fs::symlink(&file, &link).unwrap();

    cli::Cli::try_parse_from(["lxattr", "--quiet", "clear", arg(&link)])
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(1, user_names(&file).len());
}
