//! # Text Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{PrepError, PrepResult},
    types::TokenType,
    vocab::{SpecialTokens, WordTokenMap, WordVocab},
};

/// Load a [`WordVocab`] from a text vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {WORD} {INDEX}
/// ```
///
/// Blank lines are skipped.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
/// * `specials` - the markers; the padding marker must be present.
pub fn load_text_vocab_path<T, P>(
    path: P,
    specials: &SpecialTokens,
) -> PrepResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_text_vocab(reader, specials)
}

/// Read a [`WordVocab`] from a text vocab line reader.
///
/// See [`load_text_vocab_path`].
pub fn read_text_vocab<T, R>(
    reader: R,
    specials: &SpecialTokens,
) -> PrepResult<WordVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    WordVocab::from_map(read_text_word_map(reader)?, specials)
}

/// Read a [`WordTokenMap`] from a text vocab line reader.
pub fn read_text_word_map<T, R>(reader: R) -> PrepResult<WordTokenMap<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut word_map = WordTokenMap::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 1;

        let (word, index) = line
            .trim_end()
            .split_once(' ')
            .filter(|(word, _)| !word.is_empty())
            .ok_or_else(|| {
                PrepError::Parse(format!("line {lineno}: expected `{{WORD}} {{INDEX}}`"))
            })?;

        let index: u64 = index
            .trim()
            .parse()
            .map_err(|e: core::num::ParseIntError| PrepError::Parse(format!("line {lineno}: {e}")))?;
        let token = T::from_u64(index).ok_or(PrepError::TokenOutOfRange { index })?;

        word_map.insert(word.to_string(), token);
    }

    Ok(word_map)
}

/// Save a [`WordVocab`] to a text vocab file.
///
/// Lines are written in index order.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_text_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &WordVocab<T>,
    path: P,
) -> PrepResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_text_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`WordVocab`] to a [`Write`] writer.
///
/// See [`load_text_vocab_path`] for the layout.
pub fn write_text_vocab<T, W>(
    vocab: &WordVocab<T>,
    writer: &mut W,
) -> PrepResult<()>
where
    T: TokenType,
    W: Write,
{
    write_text_word_map(vocab.word_map(), writer)
}

/// Write a [`WordTokenMap`] to a [`Write`] writer, in index order.
pub fn write_text_word_map<T, W>(
    word_map: &WordTokenMap<T>,
    writer: &mut W,
) -> PrepResult<()>
where
    T: TokenType,
    W: Write,
{
    let mut entries = word_map.iter().collect::<Vec<_>>();
    entries.sort_by_key(|&(word, token)| (*token, word));

    for (word, token) in entries {
        if word.is_empty() || word.contains(char::is_whitespace) {
            return Err(PrepError::Parse(format!(
                "word {word:?} can not be written to a text vocab"
            )));
        }
        writeln!(writer, "{word} {token}")?;
    }

    Ok(())
}
