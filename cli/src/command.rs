pub mod clear;
pub mod get;
pub mod list;
pub mod remove;
pub mod set;

use crate::cli::{Cli, Commands, Verbosity};
use std::io;

pub fn entry(cli: Cli) -> io::Result<()> {
    let verbosity = cli.verbosity.verbosity();
    match cli.commands {
        Commands::List(cmd) => cmd.execute(verbosity),
        Commands::Get(cmd) => cmd.execute(verbosity),
        Commands::Set(cmd) => cmd.execute(verbosity),
        Commands::Remove(cmd) => cmd.execute(verbosity),
        Commands::Clear(cmd) => cmd.execute(verbosity),
    }
}

pub(crate) trait Command {
    fn execute(self, verbosity: Verbosity) -> io::Result<()>;
}
