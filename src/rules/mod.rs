//! Sync operations over locale trees.
//!
//! ## Module Structure
//!
//! - `diff`: recursive key-set comparison across the resource manifest
//! - `extract`: shallow missing-key extraction for one resource
//! - `merge`: recursive merge of reference keys into a target file

pub mod diff;
pub mod extract;
pub mod merge;
