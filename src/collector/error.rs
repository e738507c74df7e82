use thiserror::Error;

use crate::engine::Engine;

/// Failures of the collection pipeline.
///
/// Every variant is fatal: the pipeline never retries and never produces
/// partial output.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The driver binary could not be spawned, never became reachable, or
    /// refused the session.
    #[error("failed to launch {engine}: {reason}")]
    Launch { engine: Engine, reason: String },

    /// A WebDriver command failed after the session was up.
    #[error("{engine} session failed: {source}")]
    Session {
        engine: Engine,
        #[source]
        source: fantoccini::error::CmdError,
    },

    /// The in-page evaluation did not return an array of names.
    #[error("failed to retrieve globals")]
    Globals,

    /// An engine failed to shut down after its globals were collected.
    #[error("failed to close {engine}: {source}")]
    Close {
        engine: Engine,
        #[source]
        source: fantoccini::error::CmdError,
    },

    /// The async runtime could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
