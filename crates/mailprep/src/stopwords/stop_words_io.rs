//! # Stop Word List IO

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{errors::PrepResult, stopwords::StopWords};

/// Load a [`StopWords`] set from a word list file.
///
/// Lines are:
/// ```terminaloutput
/// {WORD}
/// ```
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Arguments
/// * `path` - the path to the word list.
pub fn load_stop_words_path<P: AsRef<Path>>(path: P) -> PrepResult<StopWords> {
    let path = path.as_ref();
    let stop_words = read_stop_words(BufReader::new(File::open(path)?))?;
    log::info!(
        "Loaded {} stop words from {}",
        stop_words.len(),
        path.display()
    );
    Ok(stop_words)
}

/// Read a [`StopWords`] set from a word list line reader.
///
/// See [`load_stop_words_path`] for the format.
pub fn read_stop_words<R: BufRead>(reader: R) -> PrepResult<StopWords> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.push(word.to_string());
    }
    Ok(StopWords::from_words(words))
}
