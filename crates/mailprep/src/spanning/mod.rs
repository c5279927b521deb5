//! # Word Spanning
//!
//! Splits text at natural-language word boundaries.
//!
//! [`WordSpanner`] runs a single labelled word pattern over the text and
//! returns the matched words as borrowed slices; whitespace is never part of
//! a word. [`ENGLISH_WORD_PATTERN`] is the default english rule set.

mod word_patterns;
mod word_spanner;

#[doc(inline)]
pub use word_patterns::*;
#[doc(inline)]
pub use word_spanner::*;
