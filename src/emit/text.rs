//! Plain list file, one name per line.

use super::{DO_NOT_EDIT, GENERATED_NOTICE};

pub(super) fn render(names: &[String]) -> String {
    let mut lines = vec![
        format!("# {GENERATED_NOTICE}"),
        format!("# {DO_NOT_EDIT}"),
        String::new(),
    ];
    lines.extend(names.iter().cloned());
    lines.push(String::new());
    lines.join("\n")
}
