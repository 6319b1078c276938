//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::trace;
use graphsteps_core::config::EngineConfig;
use graphsteps_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Configuration from `--config`, or the default location
    pub fn load_config(&self) -> Result<EngineConfig> {
        EngineConfig::resolve(self.cli.config.as_deref())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphsteps {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step traces of classical graph algorithms.");
        println!();
        println!("Run `graphsteps --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        trace::execute(ctx, self.algorithm(), self.args())
    }
}
