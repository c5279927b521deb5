#![allow(missing_docs)]

use std::sync::Arc;

use mailprep::{
    MAX_SEQ_LENGTH,
    PreparerOptions,
    StopWords,
    TextPreparer,
    vocab::{SpecialTokens, WordVocab, try_word_map_from_pairs},
};
use proptest::prelude::*;

fn preparer() -> TextPreparer<u32> {
    let map = try_word_map_from_pairs(
        [
            "<pad>", "<start>", "<end>", "hello", "world", "invoice", ".", ",", "n't", "'s",
        ]
        .into_iter()
        .enumerate()
        .map(|(i, w)| (w, i as u64)),
    )
    .unwrap();
    let vocab = WordVocab::from_map(map, &SpecialTokens::default()).unwrap();

    TextPreparer::new(
        Arc::new(vocab),
        Arc::new(StopWords::english()),
        PreparerOptions::default(),
    )
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every input prepares to exactly one row of valid indices.
    #[test]
    fn fixed_length_valid_indices(text in "\\PC{0,400}") {
        let preparer = preparer();
        let batch = preparer.try_prepare(&text).unwrap();

        prop_assert_eq!(batch.shape(), (1, MAX_SEQ_LENGTH));
        prop_assert_eq!(batch.as_slice()[0], 1);

        let vocab = preparer.vocab();
        for &index in batch.as_slice() {
            prop_assert!((index as usize) < vocab.vocab_size());
            prop_assert!(vocab.word_map().values().any(|&t| t == index));
        }
    }

    #[test]
    fn deterministic(text in "\\PC{0,200}") {
        let preparer = preparer();
        prop_assert_eq!(preparer.prepare(&text), preparer.prepare(&text));
    }

    #[test]
    fn case_insensitive(text in "[a-zA-Z ]{0,120}") {
        let preparer = preparer();
        prop_assert_eq!(
            preparer.prepare(&text),
            preparer.prepare(&text.to_uppercase())
        );
    }

    /// Filtering never produces stop words, doubled spaces, or edge spaces.
    #[test]
    fn filtered_text_is_clean(text in "[a-zA-Z ,.']{0,120}") {
        let preparer = preparer();
        let filtered = preparer
            .try_filter_stop_words(&preparer.normalize_case(&text))
            .unwrap();

        prop_assert!(!filtered.contains("  "));
        prop_assert_eq!(filtered.trim(), filtered.as_str());
        for word in filtered.split(' ').filter(|w| !w.is_empty()) {
            prop_assert!(!preparer.stop_words().contains(word), "{}", word);
        }
    }
}
