//! File parsers for locale resources.
//!
//! - `json`: JSON locale file parser producing [`crate::core::Node`] trees

pub mod json;
