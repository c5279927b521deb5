//! # Regex Utilities
//!
//! Custom word patterns may want look-ahead or back-references, which require
//! the extended machinery provided by the [`fancy_regex`] crate. That has
//! performance costs, and a backtrack limit which long inputs can exhaust;
//! so patterns which don't need it are compiled with the standard [`regex`]
//! crate instead.
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for basic regular expressions.
//!   * [`RegexPattern::Fancy`] - a pattern which was written for regex extensions.
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! The [`RegexWrapper`] type supports only one operation, ``find_iter()``,
//! which yields byte ranges so both engines share one match type.

mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;
