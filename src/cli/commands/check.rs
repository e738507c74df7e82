use std::fs;
use std::io::ErrorKind;

use anyhow::{Context, Result};

use super::shared::load_config;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::cli::args::CheckCommand;
use crate::{collector, emit};

/// Collects fresh globals and compares them against the generated file on
/// disk. A missing or differing file is reported as stale; the file itself
/// is never modified.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let config = load_config(&cmd.common)?;

    let collection = collector::run(&config)?;
    let expected = emit::render(config.format, collection.names());

    let (missing, stale) = match fs::read_to_string(&config.output) {
        Ok(current) => (false, current != expected),
        Err(err) if err.kind() == ErrorKind::NotFound => (true, false),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read {}", config.output.display()));
        }
    };

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            unique_count: collection.len(),
            per_engine: collection.per_engine().to_vec(),
            output: config.output,
            missing,
            stale,
        }),
    })
}
