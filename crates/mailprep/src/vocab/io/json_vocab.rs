//! # JSON Vocabulary IO

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::ser::{SerializeMap, Serializer};

use crate::{
    errors::{PrepError, PrepResult},
    types::{PrepHashMap, TokenType},
    vocab::{SpecialTokens, WordTokenMap, WordVocab, try_word_map_from_pairs},
};

/// Load a [`WordVocab`] from a json vocab file.
///
/// The file is one object:
/// ```json
/// { "<pad>": 0, "<start>": 1, "<end>": 2, "invoice": 3 }
/// ```
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
/// * `specials` - the markers; the padding marker must be present.
pub fn load_json_vocab_path<T, P>(
    path: P,
    specials: &SpecialTokens,
) -> PrepResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_json_vocab(reader, specials)
}

/// Read a [`WordVocab`] from a json reader.
///
/// See [`load_json_vocab_path`].
pub fn read_json_vocab<T, R>(
    reader: R,
    specials: &SpecialTokens,
) -> PrepResult<WordVocab<T>>
where
    T: TokenType,
    R: Read,
{
    WordVocab::from_map(read_json_word_map(reader)?, specials)
}

/// Read a [`WordTokenMap`] from a json reader.
pub fn read_json_word_map<T, R>(reader: R) -> PrepResult<WordTokenMap<T>>
where
    T: TokenType,
    R: Read,
{
    let raw: PrepHashMap<String, u64> = serde_json::from_reader(reader)?;
    try_word_map_from_pairs(raw)
}

/// Save a [`WordVocab`] to a json vocab file.
///
/// Entries are written in index order.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_json_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &WordVocab<T>,
    path: P,
) -> PrepResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`WordVocab`] to a [`Write`] writer as json.
pub fn write_json_vocab<T, W>(
    vocab: &WordVocab<T>,
    writer: W,
) -> PrepResult<()>
where
    T: TokenType,
    W: Write,
{
    write_json_word_map(vocab.word_map(), writer)
}

/// Write a [`WordTokenMap`] to a [`Write`] writer as json, in index order.
pub fn write_json_word_map<T, W>(
    word_map: &WordTokenMap<T>,
    writer: W,
) -> PrepResult<()>
where
    T: TokenType,
    W: Write,
{
    let mut entries = word_map
        .iter()
        .map(|(word, &token)| {
            token
                .to_u64()
                .map(|index| (word.as_str(), index))
                .ok_or_else(|| PrepError::Parse(format!("index for {word:?} does not fit u64")))
        })
        .collect::<PrepResult<Vec<_>>>()?;
    entries.sort_by_key(|&(word, index)| (index, word));

    let mut ser = serde_json::Serializer::pretty(writer);
    let mut map = (&mut ser).serialize_map(Some(entries.len()))?;
    for (word, index) in entries {
        map.serialize_entry(word, &index)?;
    }
    map.end()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_json_vocab() {
        let data = r#"{"<pad>": 0, "<start>": 1, "<end>": 2, "invoice": 3}"#;
        let vocab: WordVocab<u32> = read_json_vocab(data.as_bytes(), &SpecialTokens::default()).unwrap();

        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.lookup("invoice"), Some(3));
        assert_eq!(vocab.pad_index(), 0);
    }

    #[test]
    fn test_read_json_errors() {
        let specials = SpecialTokens::default();

        let err = read_json_vocab::<u32, _>("[1, 2]".as_bytes(), &specials).unwrap_err();
        assert!(matches!(err, PrepError::Json(_)));

        let err = read_json_vocab::<u32, _>(r#"{"<pad>": -1}"#.as_bytes(), &specials).unwrap_err();
        assert!(matches!(err, PrepError::Json(_)));

        let err = read_json_vocab::<u8, _>(r#"{"<pad>": 256}"#.as_bytes(), &specials).unwrap_err();
        assert!(matches!(err, PrepError::TokenOutOfRange { index: 256 }));

        let err = read_json_vocab::<u32, _>(r#"{"hi": 1}"#.as_bytes(), &specials).unwrap_err();
        assert!(matches!(err, PrepError::MissingSpecialToken { .. }));
    }

    #[test]
    fn test_write_index_order() {
        let map: WordTokenMap<u32> =
            try_word_map_from_pairs([("b", 2), ("<pad>", 0), ("a", 1)]).unwrap();

        let mut buf = Vec::new();
        write_json_word_map(&map, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text, "{\n  \"<pad>\": 0,\n  \"a\": 1,\n  \"b\": 2\n}");
    }

    #[test]
    fn test_save_load_json() {
        let map: WordTokenMap<u32> =
            try_word_map_from_pairs([("<pad>", 0), ("<start>", 1), ("<end>", 2), ("pear", 3)])
                .unwrap();
        let vocab = WordVocab::from_map(map, &SpecialTokens::default()).unwrap();

        let dir = tempdir::TempDir::new("vocab_test").unwrap();
        let path = dir.path().join("vocab.json");

        save_json_vocab_path(&vocab, &path).unwrap();
        let loaded: WordVocab<u32> = load_json_vocab_path(&path, &SpecialTokens::default()).unwrap();

        assert_eq!(loaded, vocab);
    }
}
