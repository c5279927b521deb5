//! # Stop Word Set

use crate::{stopwords::ENGLISH_STOP_WORDS, types::PrepHashSet};

/// A set of lowercase stop words.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopWords {
    words: PrepHashSet<String>,
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

impl StopWords {
    /// An empty stop-word set; filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in english stop words.
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS)
    }

    /// Build a set from words; each word is lowercased.
    pub fn from_words<W, S>(words: W) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::empty().with_words(words)
    }

    /// Extend the set with more words; each word is lowercased.
    pub fn with_words<W, S>(
        mut self,
        words: W,
    ) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Is `word` a stop word?
    ///
    /// The match is exact; callers lowercase first.
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.words.contains(word)
    }

    /// Iterate over the stop words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
