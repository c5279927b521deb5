//! # Word Spanner

use crate::{
    errors::PrepResult,
    spanning::{ENGLISH_WORD_PATTERN, contraction_split, double_quote_token, negation_split},
    support::regex::{RegexPattern, RegexWrapper},
};

/// Regex-based word-boundary splitter.
///
/// With treebank rules on, each match is further split:
///  * a trailing `n't` comes off its stem: `don't` -> `do`, `n't`;
///  * whole-word contractions split: `cannot` -> `can`, `not`;
///  * `"` becomes ``` `` ``` when opening, `''` when closing.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSpanner {
    /// Regex matching one word.
    word_re: RegexWrapper,

    /// Apply treebank splits and quote rewrites to matches.
    treebank_rules: bool,
}

impl WordSpanner {
    /// Build a new [`WordSpanner`] from a compiled word regex.
    ///
    /// Treebank rules are off.
    pub fn new(word_re: RegexWrapper) -> Self {
        Self {
            word_re,
            treebank_rules: false,
        }
    }

    /// Build a new [`WordSpanner`] from a word pattern.
    ///
    /// ## Arguments
    /// * `pattern` - the word match pattern.
    pub fn from_pattern<P>(pattern: P) -> PrepResult<Self>
    where
        P: Into<RegexPattern>,
    {
        Ok(Self::new(pattern.into().compile()?))
    }

    /// Build the english [`WordSpanner`].
    ///
    /// See [`ENGLISH_WORD_PATTERN`].
    pub fn try_english() -> PrepResult<Self> {
        Self::from_pattern(RegexPattern::Basic(ENGLISH_WORD_PATTERN.to_string()))
            .map(|spanner| spanner.with_treebank_rules(true))
    }

    /// Build the english [`WordSpanner`].
    ///
    /// ## Panics
    /// Only if the built-in english pattern fails to compile.
    pub fn english() -> Self {
        Self::try_english().expect("english word pattern compiles")
    }

    /// Enable or disable the treebank splits.
    pub fn with_treebank_rules(
        mut self,
        enabled: bool,
    ) -> Self {
        self.treebank_rules = enabled;
        self
    }

    /// Are the treebank splits enabled?
    pub fn treebank_rules(&self) -> bool {
        self.treebank_rules
    }

    /// Get the word pattern.
    pub fn pattern(&self) -> &str {
        self.word_re.as_str()
    }

    /// Split `text` into words.
    ///
    /// ## Returns
    /// The words, in order; slices of `text`, or static quote tokens.
    ///
    /// ## Errors
    /// Only from a `fancy_regex` word pattern; the english pattern
    /// never fails.
    pub fn try_split_words<'h>(
        &self,
        text: &'h str,
    ) -> PrepResult<Vec<&'h str>> {
        let mut words = Vec::new();
        for range in self.word_re.find_iter(text) {
            let range = range?;
            if self.treebank_rules {
                let prev = text[..range.start].chars().next_back();
                push_treebank_word(&mut words, &text[range], prev);
            } else {
                words.push(&text[range]);
            }
        }
        Ok(words)
    }
}

fn push_treebank_word<'h>(
    words: &mut Vec<&'h str>,
    word: &'h str,
    prev: Option<char>,
) {
    if word == "\"" {
        words.push(double_quote_token(prev));
        return;
    }

    match negation_split(word).or_else(|| contraction_split(word)) {
        Some(at) => {
            let (stem, rest) = word.split_at(at);
            words.push(stem);
            words.push(rest);
        }
        None => words.push(word),
    }
}
