//! # Vocabulary IO
//!
//! Two file layouts are supported:
//! * json - a single object, ``{ "word": index, ... }``;
//! * text - one ``{WORD} {INDEX}`` pair per line.
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use mailprep::vocab::{SpecialTokens, WordVocab, io::load_vocab_path};
//!
//! fn example() -> mailprep::PrepResult<WordVocab<u32>> {
//!     load_vocab_path("word_to_index.json", &SpecialTokens::default())
//! }
//! ```

use std::path::Path;

use crate::{
    errors::PrepResult,
    types::TokenType,
    vocab::{SpecialTokens, WordVocab},
};

mod json_vocab;
mod text_vocab;

#[doc(inline)]
pub use json_vocab::*;
#[doc(inline)]
pub use text_vocab::*;

/// Load a [`WordVocab`], choosing the layout by file extension.
///
/// `.json` files are read with [`load_json_vocab_path`];
/// anything else with [`load_text_vocab_path`].
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
/// * `specials` - the markers; the padding marker must be present.
pub fn load_vocab_path<T, P>(
    path: P,
    specials: &SpecialTokens,
) -> PrepResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let vocab = if is_json {
        load_json_vocab_path(path, specials)?
    } else {
        load_text_vocab_path(path, specials)?
    };

    log::info!(
        "Loaded vocabulary from {}: {} words, vocab_size {}",
        path.display(),
        vocab.len(),
        vocab.vocab_size()
    );
    Ok(vocab)
}
