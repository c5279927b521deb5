#![allow(missing_docs)]

use std::sync::Arc;

use mailprep::{
    MAX_SEQ_LENGTH,
    PreparerOptions,
    StopWords,
    TextPreparer,
    vocab::{SpecialTokens, WordTokenMap, WordVocab, try_word_map_from_pairs},
};

const PAD: u32 = 0;
const START: u32 = 1;
const END: u32 = 2;

/// Content words `w0 .. w{n}` get indices `3 ..`.
fn word_map(content_words: usize) -> WordTokenMap<u32> {
    let mut pairs = vec![
        ("<pad>".to_string(), 0u64),
        ("<start>".to_string(), 1),
        ("<end>".to_string(), 2),
        ("invoice".to_string(), 3),
        ("attached".to_string(), 4),
        ("please".to_string(), 5),
    ];
    pairs.extend((0..content_words).map(|i| (format!("w{i}"), 6 + i as u64)));
    try_word_map_from_pairs(pairs).unwrap()
}

fn preparer(content_words: usize) -> TextPreparer<u32> {
    let vocab = WordVocab::from_map(word_map(content_words), &SpecialTokens::default()).unwrap();
    TextPreparer::new(
        Arc::new(vocab),
        Arc::new(StopWords::english()),
        PreparerOptions::default(),
    )
    .unwrap()
}

fn padded(head: &[u32]) -> Vec<u32> {
    let mut expected = head.to_vec();
    expected.resize(MAX_SEQ_LENGTH, PAD);
    expected
}

#[test]
fn empty_input_is_markers_then_padding() {
    let batch = preparer(0).prepare("");

    assert_eq!(batch.shape(), (1, 256));
    assert_eq!(batch.row(0).unwrap(), padded(&[START, END]).as_slice());
    assert_eq!(
        batch.as_slice().iter().filter(|&&t| t == PAD).count(),
        254
    );
}

#[test]
fn degenerate_inputs_match_empty() {
    let preparer = preparer(0);
    let empty = preparer.prepare("");

    for text in ["the a an of", "   \n\t  ", "The A An OF", "I am, you are."] {
        let batch = preparer.prepare(text);
        if text.ends_with('.') {
            // punctuation survives filtering; it is an unknown word.
            assert_eq!(batch.as_slice()[..5], [START, PAD, PAD, END, PAD]);
        } else {
            assert_eq!(batch, empty, "{text:?}");
        }
    }
}

#[test]
fn three_content_words_are_padded() {
    let batch = preparer(0).prepare("Please see the invoice attached");

    // "see" is not in the vocab; "the" is a stop word.
    assert_eq!(
        batch.into_vec(),
        padded(&[START, 5, PAD, 3, 4, END])
    );

    let batch = preparer(0).prepare("please invoice attached");
    assert_eq!(batch.into_vec(), padded(&[START, 5, 3, 4, END]));
}

#[test]
fn long_input_truncates_prefix_and_drops_end() {
    let preparer = preparer(300);
    let text = (0..300).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" the ");

    let batch = preparer.prepare(&text);
    let row = batch.row(0).unwrap();

    assert_eq!(row.len(), MAX_SEQ_LENGTH);
    assert_eq!(row[0], START);
    let expected_content = (0..255).map(|i| 6 + i as u32).collect::<Vec<_>>();
    assert_eq!(&row[1..], expected_content.as_slice());
    assert!(!row.contains(&END));
}

#[test]
fn exactly_full_stream_keeps_end() {
    let preparer = preparer(254);
    let text = (0..254).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");

    let batch = preparer.prepare(&text);
    let row = batch.row(0).unwrap();

    assert_eq!(row[0], START);
    assert_eq!(row[255], END);
    assert!(!row.contains(&PAD));
}

#[test]
fn unknown_word_maps_to_padding_index() {
    let preparer = preparer(0);
    let vocab = preparer.vocab();

    assert!(!vocab.contains("zebra"));
    let batch = preparer.prepare("zebra invoice");
    assert_eq!(batch[(0, 1)], vocab.pad_index());
    assert_eq!(batch[(0, 2)], 3);
}

#[test]
fn case_is_ignored() {
    let preparer = preparer(0);
    assert_eq!(
        preparer.prepare("Please find the INVOICE attached"),
        preparer.prepare("please find the invoice attached")
    );
}

#[test]
fn custom_length_and_markers() {
    let map = try_word_map_from_pairs([("[PAD]", 0u64), ("[CLS]", 1), ("[SEP]", 2), ("invoice", 3)])
        .unwrap();
    let specials = SpecialTokens::new("[CLS]", "[SEP]", "[PAD]");
    let vocab: WordVocab<u16> = WordVocab::from_map(map, &specials).unwrap();

    let preparer = TextPreparer::new(
        Arc::new(vocab),
        Arc::new(StopWords::english()),
        PreparerOptions::default()
            .with_max_seq_len(4)
            .with_specials(specials),
    )
    .unwrap();

    assert_eq!(preparer.prepare("the invoice").into_vec(), vec![1, 3, 2, 0]);
    assert_eq!(preparer.prepare("invoice invoice invoice").into_vec(), vec![1, 3, 3, 3]);
}

#[test]
fn shared_between_threads() {
    let preparer = Arc::new(preparer(0));
    let expected = preparer.prepare("invoice attached");

    let handles = (0..4)
        .map(|_| {
            let preparer = preparer.clone();
            std::thread::spawn(move || preparer.prepare("invoice attached"))
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn multi_megabyte_single_word_prepares() {
    let preparer = preparer(0);
    let text = format!("please {} invoice", "x".repeat(3_000_000));

    let batch = preparer.try_prepare(&text).unwrap();
    assert_eq!(batch.into_vec(), padded(&[START, 5, PAD, 3, END]));
}

#[test]
fn long_mixed_email_prepares() {
    let preparer = preparer(0);
    let paragraph = "Hi team,\n\nPlease don't miss the \"invoice\" attached -- we can't pay \
                     until Friday... Thanks! (ref: INV-2024.07, $1,000)\n";
    let text = paragraph.repeat(5_000);

    let batch = preparer.try_prepare(&text).unwrap();
    let row = batch.row(0).unwrap();

    assert_eq!(batch.shape(), (1, MAX_SEQ_LENGTH));
    assert_eq!(row[0], START);
    assert!(row.contains(&3));
    assert!(row.contains(&5));
    assert!(!row.contains(&END));
}
