use crate::utils::{Workspace, arg};
use assert_cmd::cargo::cargo_bin_cmd;
use clap::Parser;
use lxattr_cli::cli;

/// Precondition: A file has a text attribute.
/// Action: Run `lxattr get` with `--name`.
/// Expectation: The value is printed quoted.
#[test]
fn get_by_name() {
    let Some(ws) = Workspace::new("get_by_name") else {
        return;
    };
    let file = ws.file(
        "a.txt",
        &[("user.first", b"value1"), ("user.second", b"value2")],
    );

    let mut cmd = cargo_bin_cmd!("lxattr");
    cmd.args(["get", arg(&file), "--name", "user.second"])
        .assert()
        .success()
        .stdout(format!(
            "# file: {}\nuser.second=\"value2\"\n\n",
            file.display()
        ));
}

/// Precondition: A file has a binary attribute.
/// Action: Run `lxattr get` with `--name` and each `--encoding`.
/// Expectation: The value is printed in the requested encoding.
#[test]
fn get_with_encoding() {
    let Some(ws) = Workspace::new("get_encoding") else {
        return;
    };
    let file = ws.file("a.txt", &[("user.bin", b"abc")]);

    for (encoding, expected) in [
        ("text", "\"abc\""),
        ("hex", "0x616263"),
        ("base64", "0sYWJj"),
    ] {
        let mut cmd = cargo_bin_cmd!("lxattr");
        cmd.args(["get", arg(&file), "-n", "user.bin", "-e", encoding])
            .assert()
            .success()
            .stdout(format!(
                "# file: {}\nuser.bin={expected}\n\n",
                file.display()
            ));
    }
}

/// Precondition: A file has an attribute with an empty value.
/// Action: Run `lxattr get` with `--name`.
/// Expectation: An empty quoted value is printed.
#[test]
fn get_empty_value() {
    let Some(ws) = Workspace::new("get_empty") else {
        return;
    };
    let file = ws.file("a.txt", &[("user.empty", b"")]);

    let mut cmd = cargo_bin_cmd!("lxattr");
    cmd.args(["get", arg(&file), "--name", "user.empty"])
        .assert()
        .success()
        .stdout(format!("# file: {}\nuser.empty=\"\"\n\n", file.display()));
}

/// Precondition: A file has attributes.
/// Action: Run `lxattr get` with `--dump`.
/// Expectation: Every attribute is printed with its value.
#[test]
fn get_dump() {
    let Some(ws) = Workspace::new("get_dump") else {
        return;
    };
    let file = ws.file("a.txt", &[("user.a", b"1"), ("user.b", &[0xff])]);

    let mut cmd = cargo_bin_cmd!("lxattr");
    let assert = cmd.args(["get", arg(&file), "--dump"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.lines().any(|line| line == "user.a=\"1\""));
    assert!(stdout.lines().any(|line| line == "user.b=0xff"));
}

/// Precondition: A file does not have the requested attribute.
/// Action: Run `lxattr get` with `--name`.
/// Expectation: The command returns an error.
#[test]
fn get_missing_attribute() {
    let Some(ws) = Workspace::new("get_missing") else {
        return;
    };
    let file = ws.file("a.txt", &[]);

    let result = cli::Cli::try_parse_from(["lxattr", "--quiet", "get", arg(&file), "-n", "user.none"])
        .unwrap()
        .execute();
    assert!(result.is_err());
}

/// Precondition: None.
/// Action: Run `lxattr get` with both `--name` and `--dump`.
/// Expectation: Argument parsing fails.
#[test]
fn get_name_conflicts_with_dump() {
    assert!(
        cli::Cli::try_parse_from(["lxattr", "get", "a.txt", "-n", "user.a", "--dump"]).is_err()
    );
}
