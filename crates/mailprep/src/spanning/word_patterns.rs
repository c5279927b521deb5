//! # English Word Rules

use crate::join_patterns;

/// Treebank-style english word pattern.
///
/// * a word ending in a negation clitic matches whole (`don't`), and is
///   split after matching; see [`negation_split`];
/// * other clitics split off: `'s`, `'m`, `'d`, `'ll`, `'re`, `'ve`;
/// * words are runs of letters, digits and `_`; internally joined
///   by `.`, `,` or `-` (`3.14`, `1,000`, `e-mail`, `example.com`);
/// * `...`, `--`, ``` `` ``` and `''` are single tokens;
/// * any other non-space symbol is a token by itself.
///
/// There is no look-ahead; this compiles with the basic `regex` engine,
/// which scans in linear time.
pub const ENGLISH_WORD_PATTERN: &str = join_patterns!(
    r"[\p{L}\p{N}_]+(?i:n't)\b",
    r"(?i:n't)\b",
    r"'(?i:s|m|d|ll|re|ve)\b",
    r"[\p{L}\p{N}_]+(?:[.,\-][\p{L}\p{N}_]+)*",
    r"\.\.\.",
    r"--",
    r"``",
    r"''",
    r"[^\s\p{L}\p{N}_]",
);

/// Whole words split in two, as ``(word, stem length)``; matched ignoring
/// ASCII case.
pub const ENGLISH_CONTRACTIONS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

/// Opening double quote token.
pub const OPEN_QUOTE: &str = "``";

/// Closing double quote token.
pub const CLOSE_QUOTE: &str = "''";

/// Find where a trailing negation clitic starts: `don't` -> `Some(2)`.
///
/// Only splits when a non-empty stem remains.
pub fn negation_split(word: &str) -> Option<usize> {
    let at = word.len().checked_sub(3).filter(|&at| at > 0)?;
    word.get(at..)
        .filter(|tail| tail.eq_ignore_ascii_case("n't"))
        .map(|_| at)
}

/// Find where a whole-word contraction splits: `gonna` -> `Some(3)`.
pub fn contraction_split(word: &str) -> Option<usize> {
    ENGLISH_CONTRACTIONS
        .iter()
        .find(|(contraction, _)| word.eq_ignore_ascii_case(contraction))
        .map(|&(_, at)| at)
}

/// Pick the quote token for a `"` preceded by `prev`.
///
/// A quote opens at the start of the text, or after whitespace or an
/// opening bracket; otherwise it closes.
pub fn double_quote_token(prev: Option<char>) -> &'static str {
    match prev {
        None => OPEN_QUOTE,
        Some(c) if c.is_whitespace() || "([{<".contains(c) => OPEN_QUOTE,
        Some(_) => CLOSE_QUOTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::regex::RegexPattern;

    #[test]
    fn test_english_pattern_is_basic() {
        let rw = RegexPattern::from(ENGLISH_WORD_PATTERN).compile().unwrap();
        assert!(rw.is_basic());
    }

    #[test]
    fn test_negation_split() {
        assert_eq!(negation_split("don't"), Some(2));
        assert_eq!(negation_split("CAN'T"), Some(2));
        assert_eq!(negation_split("n't"), None);
        assert_eq!(negation_split("dont"), None);
        assert_eq!(negation_split("é"), None);
    }

    #[test]
    fn test_contraction_split() {
        assert_eq!(contraction_split("cannot"), Some(3));
        assert_eq!(contraction_split("Gonna"), Some(3));
        assert_eq!(contraction_split("gone"), None);
    }

    #[test]
    fn test_double_quote_token() {
        assert_eq!(double_quote_token(None), "``");
        assert_eq!(double_quote_token(Some(' ')), "``");
        assert_eq!(double_quote_token(Some('(')), "``");
        assert_eq!(double_quote_token(Some('k')), "''");
        assert_eq!(double_quote_token(Some('.')), "''");
    }
}
