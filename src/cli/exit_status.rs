use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// generator/linter tools.
///
/// - `Success` (0): Command completed, nothing wrong
/// - `Failure` (1): Command completed but the generated file is stale
/// - `Error` (2): Command failed (launch error, evaluation error, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, nothing wrong.
    Success,
    /// Command completed but the generated file is stale or missing.
    Failure,
    /// Command failed due to an internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
