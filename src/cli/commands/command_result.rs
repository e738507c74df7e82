use std::path::PathBuf;

use crate::cli::ExitStatus;
use crate::engine::Engine;

#[derive(Debug)]
pub enum CommandSummary {
    Collect(CollectSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CollectSummary {
    pub unique_count: usize,
    pub per_engine: Vec<(Engine, usize)>,
    pub output: PathBuf,
    /// Rendered artifact, kept around instead of written on --dry-run.
    pub rendered: Option<String>,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub unique_count: usize,
    pub per_engine: Vec<(Engine, usize)>,
    pub output: PathBuf,
    /// The generated file does not exist at all.
    pub missing: bool,
    /// The generated file exists but differs from a fresh collection.
    pub stale: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a globalist command.
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Check(summary) if summary.missing || summary.stale => {
                ExitStatus::Failure
            }
            _ => ExitStatus::Success,
        }
    }
}
