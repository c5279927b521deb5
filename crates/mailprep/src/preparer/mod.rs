//! # Text Preparation
//!
//! [`TextPreparer`] turns raw text into a ``(1, max_seq_len)``
//! [`crate::IndexBatch`]; configured by [`PreparerOptions`].
//!
//! The steps, in order:
//! 1. [`TextPreparer::normalize_case`] - lowercase everything.
//! 2. [`TextPreparer::try_filter_stop_words`] - split into words, drop stop words,
//!    re-join with single spaces.
//! 3. [`TextPreparer::try_token_stream`] - split again; wrap in start / end markers.
//! 4. [`fit_to_length`] - keep the prefix, or right-pad with the padding marker.
//! 5. [`TextPreparer::lookup_indices`] - map to indices; unknown words get the
//!    padding index.
//! 6. wrap as a single-row batch.

mod length;
mod preparer_options;
mod text_preparer;

#[doc(inline)]
pub use length::*;
#[doc(inline)]
pub use preparer_options::*;
#[doc(inline)]
pub use text_preparer::*;
