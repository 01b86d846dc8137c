//! Coordinate extraction from imperfect transcripts.
//!
//! The extractor strips filler words, turns spoken digits into numerals and scans for
//! `[a-h][1-8]` tokens. When fewer than two tokens survive it falls back to concatenating
//! every file/rank character in order, which recovers moves whose whitespace the recognizer
//! dropped (`e2e4`) or split (`e 2 e 4`). The fallback only fires on exactly four
//! characters; longer or shorter strings cannot be split into `from`/`to` unambiguously.

use tracing::trace;

use crate::core::Square;

/// Filler replaced by a space, in this order.
pub const STOP_WORDS: [&str; 11] = [
    "move", "moves", "to", "square", "step", "steps", "from", "capture", "takes", "and", "by",
];

pub const NUMBER_WORDS: [(&str, &str); 8] = [
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
];

pub fn strip_stop_words(text: &str) -> String {
    STOP_WORDS
        .iter()
        .fold(text.to_lowercase(), |acc, word| acc.replace(word, " "))
}

pub fn spell_digits(text: &str) -> String {
    NUMBER_WORDS
        .iter()
        .fold(text.to_string(), |acc, (word, digit)| acc.replace(word, digit))
}

/// Valid two-character coordinate tokens, left to right, after filler and digit cleanup.
pub fn coordinate_tokens(text: &str) -> Vec<Square> {
    tokens_in(&spell_digits(&strip_stop_words(text)))
}

fn tokens_in(cleaned: &str) -> Vec<Square> {
    cleaned.split_whitespace().filter_map(Square::parse).collect()
}

/// Extract `(from, to)` from a move-shaped utterance.
///
/// Only the first two coordinates count; anything after them is treated as noise.
pub fn extract_move(text: &str) -> Option<(Square, Square)> {
    let cleaned = spell_digits(&strip_stop_words(text));
    trace!(words = ?cleaned.split_whitespace().collect::<Vec<_>>(), "processed words");

    let tokens = tokens_in(&cleaned);
    if let [from, to, ..] = tokens[..] {
        return Some((from, to));
    }
    character_fallback(&cleaned)
}

fn character_fallback(cleaned: &str) -> Option<(Square, Square)> {
    let chars: Vec<char> = cleaned
        .chars()
        .filter(|c| matches!(c, 'a'..='h' | '1'..='8'))
        .collect();
    trace!(fallback = %chars.iter().collect::<String>(), "character fallback");

    match chars[..] {
        [f1, r1, f2, r2] => Some((Square::from_chars(f1, r1)?, Square::from_chars(f2, r2)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_become_spaces() {
        assert_eq!(strip_stop_words("e2 to e4"), "e2   e4");
        assert_eq!(spell_digits("e two"), "e 2");
    }

    #[test]
    fn fallback_requires_valid_squares() {
        // "knight" contributes `g` and `h`; `gh` is not a square.
        assert_eq!(character_fallback("knight   d5"), None);
        let (e2, e4) = (Square::parse("e2").unwrap(), Square::parse("e4").unwrap());
        assert_eq!(character_fallback("e2e4"), Some((e2, e4)));
    }
}
