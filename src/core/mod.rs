//! Core tree model and file handling shared by all commands.
//!
//! - `tree`: the [`Node`] key-value tree and dotted path lookup
//! - `keys`: key path collection and set differences
//! - `translations`: the curated [`TranslationTable`]
//! - `context`: resolved configuration and resource paths
//! - `parsers`: locale file loading
//! - `json_writer`: pretty JSON output
//! - `key_report`: `key ||| value` text reports

pub mod context;
pub mod json_writer;
pub mod key_report;
pub mod keys;
pub mod parsers;
pub mod translations;
pub mod tree;

pub use context::SyncContext;
pub use translations::TranslationTable;
pub use tree::{Children, LookupError, Node, VALUE_NOT_FOUND};
