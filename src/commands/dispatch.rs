//! Command dispatch logic for treedist

use std::time::Instant;

use crate::cli::{Cli, Commands};
use treedist_core::config::DistanceConfig;
use treedist_core::error::Result;
use treedist_core::format::OutputFormat;
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: DistanceConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: DistanceConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Output format from the command line, else from config
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.output.format)
    }

    /// Strict mode from the command line flag or the config file
    pub fn strict(&self, flag: bool) -> bool {
        flag || self.config.strict_mode
    }
}

fn load_config(cli: &Cli) -> Result<DistanceConfig> {
    match &cli.config {
        Some(path) => DistanceConfig::load(path),
        None => DistanceConfig::discover(),
    }
}

fn print_banner() {
    println!("treedist {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Per-node tree distance sums and graph traversal.");
    println!();
    println!("Run `treedist --help` for usage information.");
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;
    debug!(elapsed = ?start.elapsed(), strict = config.strict_mode, strategy = %config.strategy, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    let Some(command) = &cli.command else {
        print_banner();
        return Ok(());
    };

    match command {
        Commands::Sum { input, compute } => super::sum::execute(&ctx, input, compute),
        Commands::Path {
            root,
            target,
            input,
            strict,
        } => super::path::execute(&ctx, input, *root, *target, *strict),
        Commands::Show { input, strict } => super::show::execute(&ctx, input, *strict),
        Commands::Visit {
            root,
            input,
            strict,
        } => super::visit::execute(&ctx, input, *root, *strict),
        Commands::GrayCode { bits, neighbors_of } => {
            super::gray::execute(&ctx, *bits, *neighbors_of)
        }
        Commands::CommonSubarray { left, right } => super::subarray::execute(&ctx, left, right),
    }
}
