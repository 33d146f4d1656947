//! The `lxattr-cli` crate provides the `lxattr` command, a front end for
//! listing, reading, writing and removing extended attributes of files
//! without following symbolic links.
pub mod cli;
pub mod command;
