//! # Special Tokens

use serde::{Deserialize, Serialize};

use crate::errors::{PrepError, PrepResult};

/// The default start-of-sequence marker.
pub const START_TOKEN: &str = "<start>";

/// The default end-of-sequence marker.
pub const END_TOKEN: &str = "<end>";

/// The default padding marker; also the stand-in for unknown words.
pub const PAD_TOKEN: &str = "<pad>";

/// The three reserved marker strings.
///
/// Markers are injected around, or used to fill, token streams; they are
/// never produced by word splitting (which breaks `<start>` into `<`,
/// `start`, `>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialTokens {
    /// Start-of-sequence marker.
    pub start: String,

    /// End-of-sequence marker.
    pub end: String,

    /// Padding marker.
    pub pad: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self::new(START_TOKEN, END_TOKEN, PAD_TOKEN)
    }
}

impl SpecialTokens {
    /// Create a new set of markers.
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        pad: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            pad: pad.into(),
        }
    }

    /// The markers, as `[start, end, pad]`.
    pub fn as_array(&self) -> [&str; 3] {
        [self.start.as_str(), self.end.as_str(), self.pad.as_str()]
    }

    /// Check that the markers are non-empty and pairwise distinct.
    pub fn validate(&self) -> PrepResult<()> {
        if self.as_array().iter().any(|t| t.is_empty()) {
            return Err(PrepError::InvalidConfig(
                "special tokens must be non-empty".to_string(),
            ));
        }
        if self.start == self.end || self.start == self.pad || self.end == self.pad {
            return Err(PrepError::InvalidConfig(format!(
                "special tokens must be distinct: {:?}",
                self.as_array()
            )));
        }
        Ok(())
    }
}
