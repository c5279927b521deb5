//! # Regex Wrapper
//! This module provides mechanisms to mix `regex` and `fancy_regex` types.

use core::ops::Range;

/// Error wrapper for regex patterns and matching.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(Box<regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Wrapper for compiled regex.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::Basic(a), Self::Basic(b)) => a.as_str() == b.as_str(),
            (Self::Fancy(a), Self::Fancy(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Wrapper for `find_iter`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// A [`MatchesWrapper`] iterator over the byte ranges of the matches.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchesWrapper<'r, 'h> {
        match self {
            Self::Basic(regex) => MatchesWrapper::Basic(regex.find_iter(haystack)),
            Self::Fancy(regex) => MatchesWrapper::Fancy(regex.find_iter(haystack)),
        }
    }
}

/// Wrapper for regex match iterators.
///
/// Yields the byte range of each match; `fancy_regex` can fail mid-scan
/// (backtrack limits), so items are fallible.
pub enum MatchesWrapper<'r, 'h> {
    /// Wrapper for `regex::Matches`.
    Basic(regex::Matches<'r, 'h>),

    /// Wrapper for `fancy_regex::Matches`.
    Fancy(fancy_regex::Matches<'r, 'h>),
}

impl Iterator for MatchesWrapper<'_, '_> {
    type Item = Result<Range<usize>, ErrorWrapper>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Basic(matches) => matches.next().map(|m| Ok(m.range())),
            Self::Fancy(matches) => matches
                .next()
                .map(|r| r.map(|m| m.range()).map_err(ErrorWrapper::from)),
        }
    }
}
