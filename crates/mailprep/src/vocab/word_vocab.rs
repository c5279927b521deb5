//! # Word ``{ String -> T }`` Vocabulary

use crate::{
    errors::{PrepError, PrepResult},
    types::{PrepHashMap, TokenType, hash_map_with_capacity},
    vocab::SpecialTokens,
};

/// Map of ``{ String -> T }``.
pub type WordTokenMap<T> = PrepHashMap<String, T>;

/// Convert ``(word, u64)`` pairs into a [`WordTokenMap`].
///
/// ## Errors
/// [`PrepError::TokenOutOfRange`] if an index does not fit `T`.
pub fn try_word_map_from_pairs<T, I, S>(pairs: I) -> PrepResult<WordTokenMap<T>>
where
    T: TokenType,
    I: IntoIterator<Item = (S, u64)>,
    S: Into<String>,
{
    let pairs = pairs.into_iter();
    let mut word_map: WordTokenMap<T> = hash_map_with_capacity(pairs.size_hint().0);
    for (word, index) in pairs {
        let token = T::from_u64(index).ok_or(PrepError::TokenOutOfRange { index })?;
        word_map.insert(word.into(), token);
    }
    Ok(word_map)
}

/// Frozen word vocabulary.
///
/// Lookups of words which are not in the vocabulary resolve to the
/// padding token's index; there is no separate "unknown" index.
///
/// Once built, a [`WordVocab`] is never mutated; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: TokenType> {
    word_map: WordTokenMap<T>,
    pad_token: String,
    pad_index: T,
    vocab_size: usize,
}

impl<T: TokenType> WordVocab<T> {
    /// Build a vocabulary from a word map.
    ///
    /// ## Arguments
    /// * `word_map` - the ``{ word -> index }`` table.
    /// * `specials` - the markers; `specials.pad` must be in `word_map`.
    ///
    /// ## Errors
    /// [`PrepError::MissingSpecialToken`] if the padding marker is absent.
    /// A missing start or end marker is only logged; those will resolve
    /// to the padding index.
    pub fn from_map(
        word_map: WordTokenMap<T>,
        specials: &SpecialTokens,
    ) -> PrepResult<Self> {
        specials.validate()?;

        let pad_index = *word_map
            .get(&specials.pad)
            .ok_or_else(|| PrepError::MissingSpecialToken {
                token: specials.pad.clone(),
            })?;

        for marker in [&specials.start, &specials.end] {
            if !word_map.contains_key(marker) {
                log::warn!("vocabulary has no entry for {marker:?}; it will encode as padding");
            }
        }

        let vocab_size = word_map
            .values()
            .filter_map(|t| t.to_usize())
            .max()
            .map_or(0, |max| max + 1);

        Ok(Self {
            word_map,
            pad_token: specials.pad.clone(),
            pad_index,
            vocab_size,
        })
    }

    /// Get the word map.
    pub fn word_map(&self) -> &WordTokenMap<T> {
        &self.word_map
    }

    /// Get the number of words in the vocab.
    pub fn len(&self) -> usize {
        self.word_map.len()
    }

    /// Check if the vocab is empty.
    ///
    /// Always `false`; the padding marker is required.
    pub fn is_empty(&self) -> bool {
        self.word_map.is_empty()
    }

    /// The index space size; one past the largest index.
    ///
    /// Every index this vocab returns is `< vocab_size()`.
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// The padding marker.
    pub fn pad_token(&self) -> &str {
        &self.pad_token
    }

    /// The padding index; also returned for unknown words.
    pub fn pad_index(&self) -> T {
        self.pad_index
    }

    /// Is `word` in the vocab?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.word_map.contains_key(word)
    }

    /// Return the index for the word, if any.
    pub fn lookup(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_map.get(word).copied()
    }

    /// Return the index for the word; or the padding index if absent.
    pub fn lookup_or_pad(
        &self,
        word: &str,
    ) -> T {
        self.lookup(word).unwrap_or(self.pad_index)
    }
}
