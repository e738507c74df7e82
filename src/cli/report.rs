//! Human-readable command output.
//!
//! Collect and check results are printed in the same spirit as cargo's
//! status lines: a mark, a short message, and (with `-v`) per-engine detail.
//! Kept separate from command logic so globalist can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CheckSummary, CollectSummary, CommandResult, CommandSummary, InitSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::engine::Engine;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer. Useful for testing.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Collect(summary) => print_collect(summary, verbose, writer),
        CommandSummary::Check(summary) => print_check(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_collect<W: Write>(summary: &CollectSummary, verbose: bool, writer: &mut W) {
    if let Some(rendered) = &summary.rendered {
        // --dry-run: the artifact itself is the output.
        let _ = write!(writer, "{}", rendered);
        return;
    }

    print_engine_counts(&summary.per_engine, verbose, writer);

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Collected {} unique {} from {} {}",
            summary.unique_count,
            plural(summary.unique_count, "global", "globals"),
            summary.per_engine.len(),
            plural(summary.per_engine.len(), "engine", "engines"),
        )
        .green()
    );
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Wrote {}", summary.output.display()).green()
    );
}

fn print_check<W: Write>(summary: &CheckSummary, verbose: bool, writer: &mut W) {
    print_engine_counts(&summary.per_engine, verbose, writer);

    let path = summary.output.display();
    if summary.missing {
        let _ = writeln!(
            writer,
            "{} {} does not exist",
            FAILURE_MARK.red(),
            path
        );
        let _ = writeln!(writer, "Run {} to generate it.", "globalist collect".cyan());
    } else if summary.stale {
        let _ = writeln!(
            writer,
            "{} {} is out of date",
            FAILURE_MARK.red(),
            path
        );
        let _ = writeln!(
            writer,
            "Run {} to regenerate it.",
            "globalist collect".cyan()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} is up to date ({} {})",
                path,
                summary.unique_count,
                plural(summary.unique_count, "global", "globals"),
            )
            .green()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn print_engine_counts<W: Write>(per_engine: &[(Engine, usize)], verbose: bool, writer: &mut W) {
    if !verbose {
        return;
    }
    for (engine, count) in per_engine {
        let _ = writeln!(
            writer,
            "  {}: {} {}",
            engine,
            count,
            plural(*count, "global", "globals")
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
