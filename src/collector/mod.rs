//! The collection pipeline.
//!
//! One linear, one-shot flow: launch every configured engine concurrently,
//! evaluate the introspection snippet in each, union the results, close
//! everything, and hand the unique names back to the caller. Every fan-out
//! is an all-or-nothing join; the first failure aborts the run and nothing
//! is written.

use std::collections::HashSet;

use futures::future::try_join_all;

pub use error::CollectError;
pub use globals::{GLOBALS_SCRIPT, parse_globals};

mod error;
mod globals;

use crate::config::Config;
use crate::engine::{Engine, EngineSession};

/// The deduplicated union of global names across all collected engines.
#[derive(Debug)]
pub struct Collection {
    names: Vec<String>,
    per_engine: Vec<(Engine, usize)>,
}

impl Collection {
    /// Unique names, ordered by first occurrence across the per-engine
    /// lists in launch order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Raw (pre-dedup) name counts per engine, in launch order.
    pub fn per_engine(&self) -> &[(Engine, usize)] {
        &self.per_engine
    }
}

/// Runs the full pipeline on a fresh single-threaded runtime.
pub fn run(config: &Config) -> Result<Collection, CollectError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CollectError::Runtime)?
        .block_on(collect(config))
}

/// Launches every configured engine, gathers globals from each, and shuts
/// them all down. Fails on the first error at any stage.
pub async fn collect(config: &Config) -> Result<Collection, CollectError> {
    let sessions = try_join_all(
        config
            .engines
            .iter()
            .map(|&engine| EngineSession::launch(engine, config)),
    )
    .await?;

    let name_lists = try_join_all(sessions.iter().map(detect_globals)).await?;

    // Closes happen before anything is reported or written; a close
    // failure aborts the run like any other.
    try_join_all(sessions.into_iter().map(EngineSession::close)).await?;

    let per_engine = config
        .engines
        .iter()
        .copied()
        .zip(name_lists.iter().map(Vec::len))
        .collect();
    let names = dedupe(name_lists.into_iter().flatten());

    Ok(Collection { names, per_engine })
}

/// Evaluates the introspection snippet on a blank page and returns the
/// own-property names of that page's global object.
pub async fn detect_globals(session: &EngineSession) -> Result<Vec<String>, CollectError> {
    session.blank_page().await?;
    let value = session.evaluate(GLOBALS_SCRIPT).await?;
    parse_globals(value)
}

/// First-occurrence-ordered deduplication.
fn dedupe(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
