//! # `mailprep` Sequence Preparation
//!
//! Turns raw email text into a fixed-length sequence of vocabulary indices,
//! ready to be fed to a sequence model as a single-example batch.
//!
//! The pipeline is strictly linear:
//!
//! ```text
//! raw text
//!   -> lowercase
//!   -> stop-word filtered word split
//!   -> word split + [START] .. [END] markers
//!   -> truncate / right-pad to `max_seq_len`
//!   -> vocabulary lookup (unknown words -> PAD index)
//!   -> (1, max_seq_len) index batch
//! ```
//!
//! See:
//! * [`preparer`] for [`TextPreparer`] and its [`PreparerOptions`].
//! * [`vocab`] for the frozen [`WordVocab`] and vocab file io.
//! * [`stopwords`] for the stop-word set.
//! * [`spanning`] for the english word-boundary splitter.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::PrepHash{*}`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! As ``ahash``, but with ``foldhash``. If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``tracing``
//!
//! This enables ``tracing`` instrumentation points on the preparer.
//!
//! ## Preparing an Email
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mailprep::{
//!     PreparerOptions,
//!     StopWords,
//!     TextPreparer,
//!     vocab::{SpecialTokens, io::load_vocab_path},
//! };
//!
//! fn example() -> mailprep::PrepResult<()> {
//!     let vocab = load_vocab_path::<u32, _>("word_to_index.json", &SpecialTokens::default())?;
//!
//!     let preparer = TextPreparer::new(
//!         Arc::new(vocab),
//!         Arc::new(StopWords::english()),
//!         PreparerOptions::default(),
//!     )?;
//!
//!     let batch = preparer.prepare("Hello team, the meeting moved to Friday.");
//!     assert_eq!(batch.shape(), (1, 256));
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod batch;
pub mod errors;
pub mod preparer;
pub mod spanning;
pub mod stopwords;
pub mod support;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use batch::IndexBatch;
#[doc(inline)]
pub use errors::{PrepError, PrepResult};
#[doc(inline)]
pub use preparer::{MAX_SEQ_LENGTH, PreparerOptions, TextPreparer};
#[doc(inline)]
pub use stopwords::StopWords;
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{SpecialTokens, WordVocab};
