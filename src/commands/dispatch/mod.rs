//! Command dispatch logic for graphsteps

use std::time::Instant;

use crate::cli::Cli;
use graphsteps_core::error::Result;

mod command;
pub(crate) mod macros;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
