use crate::{cli::Verbosity, command::Command};
use clap::{Parser, ValueHint};
use std::{io, path::PathBuf};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct ClearCommand {
    #[arg(required = true, value_hint = ValueHint::AnyPath)]
    files: Vec<PathBuf>,
}

impl Command for ClearCommand {
    #[inline]
    fn execute(self, verbosity: Verbosity) -> io::Result<()> {
        clear_xattrs(self, verbosity)
    }
}

fn clear_xattrs(args: ClearCommand, verbosity: Verbosity) -> io::Result<()> {
    for path in &args.files {
        lxattr::clear_attributes(path)?;
        if verbosity == Verbosity::Verbose {
            eprintln!("cleared {}", path.display());
        }
    }
    Ok(())
}
