//! Generated-artifact rendering.
//!
//! Each renderer is a pure function of the name list, so a fixed input
//! produces byte-identical output on every run. The name order is taken
//! as-is from the collector.

mod rust;
mod text;
mod typescript;

use crate::config::OutputFormat;

/// Header lines shared by all formats, minus the comment marker.
const GENERATED_NOTICE: &str = "This file is auto-generated by running `globalist collect`";
const DO_NOT_EDIT: &str = "DO NOT EDIT THIS FILE MANUALLY";

/// Render `names` in the requested format, including the trailing newline.
pub fn render(format: OutputFormat, names: &[String]) -> String {
    match format {
        OutputFormat::Typescript => typescript::render(names),
        OutputFormat::Rust => rust::render(names),
        OutputFormat::Text => text::render(names),
    }
}
