//! # Regex Pattern Labeled Wrapper

use crate::support::regex::{ErrorWrapper, RegexWrapper};

/// Labeled wrapper for regex patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(String),

    /// This is a regex pattern that requires regex extensions.
    Fancy(String),

    /// The requirements of this pattern are unknown; it may require regex extensions.
    Adaptive(String),
}

impl From<&str> for RegexPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<String> for RegexPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a [`RegexWrapper`].
    ///
    /// `Adaptive` patterns try `regex` first, and fall up to `fancy_regex`.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Adaptive(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .or_else(|_| {
                    fancy_regex::Regex::new(pattern)
                        .map(RegexWrapper::from)
                        .map_err(ErrorWrapper::from)
                }),
        }
    }
}
