//! # Preparer Options

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{PrepError, PrepResult},
    vocab::SpecialTokens,
};

/// The default output sequence length.
pub const MAX_SEQ_LENGTH: usize = 256;

/// Options for configuring a [`crate::TextPreparer`].
///
/// Missing json fields take their defaults:
/// ```json
/// { "max_seq_len": 256, "specials": { "start": "<start>", "end": "<end>", "pad": "<pad>" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreparerOptions {
    /// The exact length of every prepared sequence.
    pub max_seq_len: usize,

    /// The start / end / padding markers.
    pub specials: SpecialTokens,
}

impl Default for PreparerOptions {
    fn default() -> Self {
        Self {
            max_seq_len: MAX_SEQ_LENGTH,
            specials: SpecialTokens::default(),
        }
    }
}

impl PreparerOptions {
    /// Load options from a json file.
    pub fn load_json_path<P: AsRef<Path>>(path: P) -> PrepResult<Self> {
        Self::read_json(BufReader::new(File::open(path)?))
    }

    /// Read options from a json reader.
    ///
    /// The result is validated.
    pub fn read_json<R: Read>(reader: R) -> PrepResult<Self> {
        let options: Self = serde_json::from_reader(reader)?;
        options.validate()?;
        Ok(options)
    }

    /// Sets the output sequence length.
    pub fn set_max_seq_len(
        &mut self,
        max_seq_len: usize,
    ) {
        self.max_seq_len = max_seq_len;
    }

    /// Sets the output sequence length.
    pub fn with_max_seq_len(
        mut self,
        max_seq_len: usize,
    ) -> Self {
        self.set_max_seq_len(max_seq_len);
        self
    }

    /// Sets the markers.
    pub fn set_specials(
        &mut self,
        specials: SpecialTokens,
    ) {
        self.specials = specials;
    }

    /// Sets the markers.
    pub fn with_specials(
        mut self,
        specials: SpecialTokens,
    ) -> Self {
        self.set_specials(specials);
        self
    }

    /// Check the options are usable.
    ///
    /// `max_seq_len` must be positive, and the markers valid.
    pub fn validate(&self) -> PrepResult<()> {
        if self.max_seq_len == 0 {
            return Err(PrepError::InvalidConfig(
                "max_seq_len must be positive".to_string(),
            ));
        }
        self.specials.validate()
    }
}
