use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::CommandResult;
use super::commands::{check::check, collect::collect, init::init};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Collect(cmd)) => collect(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
