//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! Globalist commands, using clap's derive API.
//!
//! ## Commands
//!
//! - `collect`: Launch the configured engines and write the generated file
//! - `check`: Verify the generated file matches a fresh collection
//! - `init`: Initialize globalist configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::OutputFormat;
use crate::engine::Engine;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Collect(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the collecting commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Engines to collect from, in output order (overrides config file)
    /// Can be specified multiple times: --engine chromium --engine firefox
    #[arg(long = "engine", value_enum)]
    pub engines: Vec<Engine>,

    /// Generated file path (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Seconds to wait for a driver to accept connections (overrides config file)
    #[arg(long)]
    pub launch_timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CollectCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the generated content to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect globals from browser engines and write the generated file
    Collect(CollectCommand),
    /// Verify the generated file is up to date with a fresh collection
    Check(CheckCommand),
    /// Initialize a new .globalistrc.json configuration file
    Init,
}
