//! Globalist - browser globals collector
//!
//! Globalist launches browser engines over WebDriver, enumerates the
//! own-property keys of each engine's global object, and writes the
//! deduplicated union to a generated source file. Downstream tooling uses
//! that list to tell browser-provided names apart from application code.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `collector`: Collection pipeline (fan-out, dedup, shape validation)
//! - `config`: Configuration file loading and parsing
//! - `emit`: Generated-artifact rendering (TypeScript, Rust, plain text)
//! - `engine`: WebDriver driver processes and engine sessions

pub mod cli;
pub mod collector;
pub mod config;
pub mod emit;
pub mod engine;
