use serde_json::Value;

use super::CollectError;

/// Expression evaluated in the page to enumerate own-property keys of the
/// global object. `getOwnPropertyDescriptors` also surfaces non-enumerable
/// keys, which plain `Object.keys(globalThis)` would miss.
pub const GLOBALS_SCRIPT: &str =
    "return Object.keys(Object.getOwnPropertyDescriptors(globalThis));";

/// Validates the shape of an evaluation result and keeps its string
/// entries.
///
/// A non-array result is a hard failure. Non-string entries inside an
/// array are dropped silently; they never fail the run by themselves.
pub fn parse_globals(value: Value) -> Result<Vec<String>, CollectError> {
    let Value::Array(entries) = value else {
        return Err(CollectError::Globals);
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(name) => Some(name),
            _ => None,
        })
        .collect())
}
