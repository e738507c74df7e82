//! The original downstream artifact: a `const` list of names plus a key
//! union type derived from it.

use super::{DO_NOT_EDIT, GENERATED_NOTICE};

pub(super) fn render(names: &[String]) -> String {
    let mut lines = vec![
        format!("// {GENERATED_NOTICE}"),
        format!("// {DO_NOT_EDIT}"),
        String::new(),
        "export const globals = [".to_string(),
    ];
    lines.extend(names.iter().map(|name| format!("    '{name}',")));
    lines.push("] as const;".to_string());
    lines.push(String::new());
    lines.push("export type BrowserGlobalKey = typeof globals[number];".to_string());
    lines.push(String::new());
    lines.join("\n")
}
