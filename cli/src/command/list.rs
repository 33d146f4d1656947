use crate::{cli::Verbosity, command::Command};
use clap::{Parser, ValueHint};
use std::{io, path::PathBuf};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct ListCommand {
    #[arg(required = true, value_hint = ValueHint::AnyPath)]
    files: Vec<PathBuf>,
}

impl Command for ListCommand {
    #[inline]
    fn execute(self, _: Verbosity) -> io::Result<()> {
        list_xattrs(self)
    }
}

fn list_xattrs(args: ListCommand) -> io::Result<()> {
    for path in &args.files {
        let names = lxattr::list_attributes(path)?;
        println!("# file: {}", path.display());
        for name in names {
            println!("{}", name.to_string_lossy());
        }
        println!();
    }
    Ok(())
}
