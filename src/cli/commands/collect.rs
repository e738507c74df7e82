use std::fs;

use anyhow::{Context, Result};

use super::shared::load_config;
use super::{CollectSummary, CommandResult, CommandSummary};
use crate::cli::args::CollectCommand;
use crate::{collector, emit};

/// Launches the configured engines, collects their globals, and writes the
/// generated file. Nothing is written unless every engine launched,
/// answered, and closed cleanly.
pub fn collect(cmd: CollectCommand) -> Result<CommandResult> {
    let config = load_config(&cmd.common)?;

    let collection = collector::run(&config)?;
    let rendered = emit::render(config.format, collection.names());

    let rendered = if cmd.dry_run {
        Some(rendered)
    } else {
        fs::write(&config.output, &rendered)
            .with_context(|| format!("Failed to write {}", config.output.display()))?;
        None
    };

    Ok(CommandResult {
        summary: CommandSummary::Collect(CollectSummary {
            unique_count: collection.len(),
            per_engine: collection.per_engine().to_vec(),
            output: config.output,
            rendered,
        }),
    })
}
