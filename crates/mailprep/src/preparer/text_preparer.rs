//! # Text Preparer

use std::sync::Arc;

use crate::{
    batch::IndexBatch,
    errors::{PrepError, PrepResult},
    preparer::{PreparerOptions, fit_to_length},
    spanning::WordSpanner,
    stopwords::StopWords,
    types::TokenType,
    vocab::WordVocab,
};

/// Raw text to fixed-length index sequence preparer.
///
/// Combines:
///  * a frozen [`WordVocab`],
///  * a [`StopWords`] set,
///  * a [`WordSpanner`], and
///  * [`PreparerOptions`].
///
/// Preparing holds no per-call state; a preparer may be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct TextPreparer<T: TokenType> {
    vocab: Arc<WordVocab<T>>,
    stop_words: Arc<StopWords>,
    spanner: WordSpanner,
    options: PreparerOptions,
}

impl<T: TokenType> TextPreparer<T> {
    /// Create a new preparer with the english [`WordSpanner`].
    ///
    /// ## Errors
    /// [`PrepError::InvalidConfig`] if the options are invalid, or name a
    /// different padding marker than the vocab was built with.
    pub fn new(
        vocab: Arc<WordVocab<T>>,
        stop_words: Arc<StopWords>,
        options: PreparerOptions,
    ) -> PrepResult<Self> {
        options.validate()?;

        if vocab.pad_token() != options.specials.pad {
            return Err(PrepError::InvalidConfig(format!(
                "vocab padding marker {:?} does not match options padding marker {:?}",
                vocab.pad_token(),
                options.specials.pad
            )));
        }

        Ok(Self {
            vocab,
            stop_words,
            spanner: WordSpanner::try_english()?,
            options,
        })
    }

    /// Replace the word spanner.
    pub fn with_spanner(
        mut self,
        spanner: WordSpanner,
    ) -> Self {
        self.spanner = spanner;
        self
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<WordVocab<T>> {
        &self.vocab
    }

    /// Get the stop words.
    pub fn stop_words(&self) -> &Arc<StopWords> {
        &self.stop_words
    }

    /// Get the word spanner.
    pub fn spanner(&self) -> &WordSpanner {
        &self.spanner
    }

    /// Get the options.
    pub fn options(&self) -> &PreparerOptions {
        &self.options
    }

    /// The output sequence length.
    pub fn max_seq_len(&self) -> usize {
        self.options.max_seq_len
    }

    /// The ``[start, end, pad]`` marker indices.
    pub fn special_indices(&self) -> [T; 3] {
        self.options
            .specials
            .as_array()
            .map(|marker| self.vocab.lookup_or_pad(marker))
    }

    /// Lowercase the whole text.
    pub fn normalize_case(
        &self,
        text: &str,
    ) -> String {
        text.to_lowercase()
    }

    /// Split `text` into words and drop the stop words.
    ///
    /// ## Returns
    /// The surviving (lowercased) words joined by single spaces;
    /// `""` if nothing survives.
    pub fn try_filter_stop_words(
        &self,
        text: &str,
    ) -> PrepResult<String> {
        let words = self.spanner.try_split_words(text)?;

        let kept = words
            .into_iter()
            .map(str::to_lowercase)
            .filter(|word| !self.stop_words.contains(word))
            .collect::<Vec<_>>();

        Ok(kept.join(" "))
    }

    /// Split `text` into words, wrapped in the start and end markers.
    ///
    /// The stream is not length-normalized.
    pub fn try_token_stream(
        &self,
        text: &str,
    ) -> PrepResult<Vec<String>> {
        let specials = &self.options.specials;
        let words = self.spanner.try_split_words(text)?;

        let mut stream = Vec::with_capacity(words.len() + 2);
        stream.push(specials.start.clone());
        stream.extend(words.into_iter().map(str::to_string));
        stream.push(specials.end.clone());
        Ok(stream)
    }

    /// Run the text half of the pipeline.
    ///
    /// ## Returns
    /// The length-normalized token stream; exactly
    /// [`max_seq_len`](Self::max_seq_len) tokens.
    pub fn try_prepare_tokens(
        &self,
        text: &str,
    ) -> PrepResult<Vec<String>> {
        let normalized = self.normalize_case(text);

        let filtered = self.try_filter_stop_words(&normalized)?;
        log::debug!("filtered text: {filtered:?}");

        let stream = self.try_token_stream(&filtered)?;
        let stream_len = stream.len();

        let stream = fit_to_length(stream, self.max_seq_len(), &self.options.specials.pad);
        log::debug!("token stream: {} tokens, fit to {}", stream_len, stream.len());

        Ok(stream)
    }

    /// Map tokens to vocabulary indices; unknown tokens get the padding index.
    pub fn lookup_indices<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<T> {
        tokens
            .iter()
            .map(|token| self.vocab.lookup_or_pad(token.as_ref()))
            .collect()
    }

    /// Prepare `text` as a ``(1, max_seq_len)`` index batch.
    ///
    /// ## Errors
    /// Only on an internal word-splitting failure; every input string,
    /// including `""`, prepares successfully.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text))
    )]
    pub fn try_prepare(
        &self,
        text: &str,
    ) -> PrepResult<IndexBatch<T>> {
        let tokens = self.try_prepare_tokens(text)?;
        Ok(IndexBatch::from_row(self.lookup_indices(&tokens)))
    }

    /// Prepare `text` as a ``(1, max_seq_len)`` index batch.
    ///
    /// ## Panics
    /// On an internal word-splitting failure; see [`try_prepare`](Self::try_prepare).
    pub fn prepare(
        &self,
        text: &str,
    ) -> IndexBatch<T> {
        match self.try_prepare(text) {
            Ok(batch) => batch,
            Err(err) => panic!("failed to prepare text: {err}"),
        }
    }
}
