use crate::{cli::Verbosity, command::Command};
use clap::{Parser, ValueHint};
use std::{io, path::PathBuf};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct RemoveCommand {
    #[arg(required = true, value_hint = ValueHint::AnyPath)]
    files: Vec<PathBuf>,
    #[arg(short, long, help = "Name of extended attribute to remove")]
    name: String,
}

impl Command for RemoveCommand {
    #[inline]
    fn execute(self, verbosity: Verbosity) -> io::Result<()> {
        remove_xattr(self, verbosity)
    }
}

fn remove_xattr(args: RemoveCommand, verbosity: Verbosity) -> io::Result<()> {
    for path in &args.files {
        lxattr::remove_attribute(path, &args.name)?;
        if verbosity == Verbosity::Verbose {
            eprintln!("removed {} from {}", args.name, path.display());
        }
    }
    Ok(())
}
