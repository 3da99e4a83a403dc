//! locsync - keep localization JSON files in sync with a reference locale
//!
//! locsync compares the nested key sets of locale resource files (e.g.
//! `en/settings.json` against `zh-CN/settings.json`), reports what the target
//! locale is missing, and merges the missing keys in, preferring a curated
//! translation table over copying the reference text.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key-value tree model, file loading and writing
//! - `issues`: Issue type definitions and reporting
//! - `rules`: The diff, extract and merge operations
//! - `logging`: Diagnostic logging setup

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod rules;
