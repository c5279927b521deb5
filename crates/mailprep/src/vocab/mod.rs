//! # Vocabulary
//!
//! This module provides the frozen word vocabulary and related io mechanisms.
//!
//! * [`SpecialTokens`] - the start / end / padding marker strings.
//! * [`WordVocab`] - a ``{ String -> T }`` vocabulary; with the padding
//!   index as the fallback for unknown words.
//! * [`io`] - json and text vocabulary files.
pub mod io;

mod special_tokens;
mod word_vocab;

#[doc(inline)]
pub use special_tokens::*;
#[doc(inline)]
pub use word_vocab::*;
