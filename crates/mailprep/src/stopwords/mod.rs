//! # Stop Words
//!
//! High-frequency, low-signal words which are dropped from text before
//! it is tokenized for the model.
//!
//! * [`StopWords::english()`] - the built-in english list, [`ENGLISH_STOP_WORDS`].
//! * [`load_stop_words_path`] / [`read_stop_words`] - external word lists.

mod english;
mod stop_words;
mod stop_words_io;

#[doc(inline)]
pub use english::*;
#[doc(inline)]
pub use stop_words::*;
#[doc(inline)]
pub use stop_words_io::*;
