pub(crate) mod value;

use crate::command::{self, clear, get, list, remove, set};
use clap::{Args, Parser, Subcommand};
use std::io;
pub(crate) use value::*;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(name = "lxattr", version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) commands: Commands,
    #[command(flatten)]
    pub(crate) verbosity: VerbosityArgs,
}

impl Cli {
    /// Installs the stderr logger selected by the verbosity flags.
    pub fn init_logger(&self) -> io::Result<()> {
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {}",
                    record.level().as_str().to_ascii_lowercase(),
                    message
                ))
            })
            .level(self.verbosity.log_level_filter())
            .chain(io::stderr())
            .apply()
            .map_err(io::Error::other)
    }

    #[inline]
    pub fn execute(self) -> anyhow::Result<()> {
        Ok(command::entry(self)?)
    }
}

#[derive(Args, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub(crate) struct VerbosityArgs {
    #[arg(
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Make some output more quiet"
    )]
    quiet: bool,
    #[arg(long, global = true, help = "Make some output more verbose")]
    verbose: bool,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t,
        help = "Log level written to stderr"
    )]
    log_level: LogLevel,
}

impl VerbosityArgs {
    #[inline]
    pub(crate) const fn verbosity(&self) -> Verbosity {
        match (self.quiet, self.verbose) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }

    #[inline]
    pub(crate) const fn log_level_filter(&self) -> log::LevelFilter {
        match self.verbosity() {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Verbose => log::LevelFilter::Info,
            Verbosity::Normal => self.log_level.as_level_filter(),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

#[derive(Subcommand, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Commands {
    #[command(about = "List extended attribute names of files")]
    List(list::ListCommand),
    #[command(about = "Get extended attributes of files")]
    Get(get::GetCommand),
    #[command(about = "Set an extended attribute of files")]
    Set(set::SetCommand),
    #[command(visible_alias = "rm", about = "Remove an extended attribute from files")]
    Remove(remove::RemoveCommand),
    #[command(about = "Remove all extended attributes from files")]
    Clear(clear::ClearCommand),
}
