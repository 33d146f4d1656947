use crate::utils::{Workspace, arg, user_names};
use clap::Parser;
use lxattr_cli::cli;

/// Precondition: Two files carry several attributes.
/// Action: Run `lxattr clear` on both.
/// Expectation: No `user.` attributes are left.
#[test]
fn clear_all() {
    let Some(ws) = Workspace::new("clear_all") else {
        return;
    };
    let a = ws.file("a.txt", &[("user.a", b"1"), ("user.b", b"")]);
    let b = ws.file("b.txt", &[("user.c", b"3")]);

    cli::Cli::try_parse_from(["lxattr", "--quiet", "clear", arg(&a), arg(&b)])
        .unwrap()
        .execute()
        .unwrap();
    assert!(user_names(&a).is_empty());
    assert!(user_names(&b).is_empty());
}

/// Precondition: The first path is cleared, the second does not exist and
/// the third has an attribute.
/// Action: Run `lxattr clear` on all three.
/// Expectation: The command fails at the missing path and the third file is
/// left untouched.
#[test]
fn clear_stops_at_first_failure() {
    let Some(ws) = Workspace::new("clear_fail_fast") else {
        return;
    };
    let a = ws.file("a.txt", &[("user.a", b"1")]);
    let missing = ws.path().join("missing.txt");
    let c = ws.file("c.txt", &[("user.c", b"3")]);

    let result = cli::Cli::try_parse_from([
        "lxattr",
        "clear",
        arg(&a),
        arg(&missing),
        arg(&c),
    ])
    .unwrap()
    .execute();
    assert!(result.is_err());
    assert!(user_names(&a).is_empty());
    assert_eq!(1, user_names(&c).len());
}
