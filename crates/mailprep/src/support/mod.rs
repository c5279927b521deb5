//! # Support Utilities
//!
//! Pattern macros and the `regex` / `fancy_regex` wrapper machinery
//! used by [`crate::spanning`].

pub mod pattern_tools;
pub mod regex;
