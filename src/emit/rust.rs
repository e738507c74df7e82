//! Rust constants module, for downstream consumers in this ecosystem.

use super::{DO_NOT_EDIT, GENERATED_NOTICE};

pub(super) fn render(names: &[String]) -> String {
    let mut lines = vec![
        format!("// {GENERATED_NOTICE}"),
        format!("// {DO_NOT_EDIT}"),
        String::new(),
        "/// Property names found on the global object of at least one".to_string(),
        "/// supported browser engine.".to_string(),
        "pub static BROWSER_GLOBALS: &[&str] = &[".to_string(),
    ];
    lines.extend(names.iter().map(|name| format!("    {name:?},")));
    lines.push("];".to_string());
    lines.push(String::new());
    lines.push("/// Whether `name` is a browser-provided global.".to_string());
    lines.push("pub fn is_browser_global(name: &str) -> bool {".to_string());
    lines.push("    BROWSER_GLOBALS.iter().any(|global| *global == name)".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.join("\n")
}
