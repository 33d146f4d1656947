use crate::utils::{Workspace, arg, user_names};
use clap::Parser;
use lxattr_cli::cli;
use std::ffi::OsString;

/// Precondition: A file has two attributes.
/// Action: Run `lxattr remove` for one of them.
/// Expectation: Only the other attribute remains.
#[test]
fn remove_one() {
    let Some(ws) = Workspace::new("remove_one") else {
        return;
    };
    let file = ws.file("a.txt", &[("user.a", b"1"), ("user.b", b"2")]);

    cli::Cli::try_parse_from(["lxattr", "--quiet", "remove", arg(&file), "--name", "user.a"])
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(vec![OsString::from("user.b")], user_names(&file));
}

/// Precondition: A file without the attribute.
/// Action: Run `lxattr rm` for it.
/// Expectation: The command returns an error.
#[test]
fn remove_missing() {
    let Some(ws) = Workspace::new("remove_missing") else {
        return;
    };
    let file = ws.file("a.txt", &[]);

    let result = cli::Cli::try_parse_from(["lxattr", "rm", arg(&file), "-n", "user.a"])
        .unwrap()
        .execute();
    assert!(result.is_err());
}
