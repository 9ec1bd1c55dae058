//! Command dispatch logic for graphwalk

use std::time::Instant;

use graphwalk_core::config::{GlobalConfig, Strategy};
use graphwalk_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{components, islands, path};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GlobalConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: GlobalConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Strategy from `--strategy`, falling back to the config file
    pub fn strategy(&self) -> Strategy {
        self.cli.strategy.unwrap_or(self.config.strategy)
    }

    pub fn recursion_limit(&self) -> usize {
        self.config.recursion_limit
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
        println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
        println!("Run `graphwalk --help` for usage.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Components { file } => components::execute(ctx, file),
            Commands::Path {
                file,
                from,
                to,
                dijkstra,
            } => path::execute(ctx, file, *from, *to, *dijkstra),
            Commands::Islands { file, preserve } => islands::execute(ctx, file, *preserve),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = GlobalConfig::load()?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
