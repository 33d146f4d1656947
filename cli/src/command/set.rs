use crate::{
    cli::{Verbosity, XattrValue},
    command::Command,
};
use clap::{Parser, ValueHint};
use lxattr::SetFlags;
use std::{io, path::PathBuf};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct SetCommand {
    #[arg(required = true, value_hint = ValueHint::AnyPath)]
    files: Vec<PathBuf>,
    #[arg(short, long, help = "Name of extended attribute")]
    name: String,
    #[arg(
        short,
        long,
        help = "Value of extended attribute (prefix with 0x for hex or 0s for base64)"
    )]
    value: Option<XattrValue>,
    #[arg(
        long,
        conflicts_with = "replace",
        help = "Fail if the attribute already exists"
    )]
    create: bool,
    #[arg(long, help = "Fail if the attribute does not exist")]
    replace: bool,
}

impl SetCommand {
    #[inline]
    fn flags(&self) -> SetFlags {
        match (self.create, self.replace) {
            (true, _) => SetFlags::CreateOnly,
            (false, true) => SetFlags::ReplaceOnly,
            (false, false) => SetFlags::Either,
        }
    }
}

impl Command for SetCommand {
    #[inline]
    fn execute(self, verbosity: Verbosity) -> io::Result<()> {
        set_xattr(self, verbosity)
    }
}

fn set_xattr(args: SetCommand, verbosity: Verbosity) -> io::Result<()> {
    let flags = args.flags();
    let value = args.value.as_ref().map_or(&[][..], |it| it.as_bytes());
    for path in &args.files {
        lxattr::set_attribute(path, &args.name, value, flags)?;
        if verbosity == Verbosity::Verbose {
            eprintln!("set {} on {}", args.name, path.display());
        }
    }
    Ok(())
}
