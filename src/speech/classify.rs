//! Priority-ordered intent classification.
//!
//! [`RULES`] is evaluated top to bottom and the first rule that returns an intent wins.
//! Specific phrasings sit above the general ones they contain: "last three moves" is tested
//! before "last move", the piece census before piece-by-kind lookups, and free-form move
//! parsing comes last.

use tracing::debug;

use crate::core::{PieceKind, Square};
use crate::speech::extract::{coordinate_tokens, extract_move, spell_digits};
use crate::speech::intent::{ColorQuery, Intent};

/// One named entry of the classification table.
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<Intent>,
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "meta",
        apply: meta_command,
    },
    Rule {
        name: "census",
        apply: piece_census,
    },
    Rule {
        name: "locate",
        apply: locate_pieces,
    },
    Rule {
        name: "last_n_moves",
        apply: last_n_moves,
    },
    Rule {
        name: "last_move",
        apply: last_move,
    },
    Rule {
        name: "piece_at",
        apply: piece_at,
    },
    Rule {
        name: "summary",
        apply: summary,
    },
    Rule {
        name: "move",
        apply: make_move,
    },
];

/// Classify a (normalized) utterance. Matching is case-insensitive.
pub fn classify(text: &str) -> Intent {
    match matching_rule(text) {
        Some((rule, intent)) => {
            debug!(rule = rule.name, ?intent, "classified");
            intent
        }
        None => Intent::Unrecognized {
            reason: format!("no command or board coordinates in {:?}", text.trim()),
        },
    }
}

/// The first rule that fires on `text`, with the intent it produced.
pub fn matching_rule(text: &str) -> Option<(&'static Rule, Intent)> {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(&lower).map(|intent| (rule, intent)))
}

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "close"];
const NEW_GAME_WORDS: [&str; 3] = ["new game", "restart", "start over"];
const HELP_WORDS: [&str; 2] = ["help", "what can i say"];

/// Meta commands only count when they are the whole utterance ("please quit now" is not).
fn meta_command(text: &str) -> Option<Intent> {
    let t = text.trim();
    if QUIT_WORDS.contains(&t) {
        Some(Intent::Quit)
    } else if NEW_GAME_WORDS.contains(&t) {
        Some(Intent::NewGame)
    } else if HELP_WORDS.contains(&t) {
        Some(Intent::Help)
    } else {
        None
    }
}

const CENSUS_PHRASES: [&str; 3] = ["what pieces do i have", "my pieces left", "remaining pieces"];

fn piece_census(text: &str) -> Option<Intent> {
    CENSUS_PHRASES
        .iter()
        .any(|p| text.contains(p))
        .then_some(Intent::QueryAllMyPieces)
}

const LOCATE_PREFIXES: [(&str, ColorQuery); 6] = [
    ("where are my", ColorQuery::Mine),
    ("where is my", ColorQuery::Mine),
    ("where are black", ColorQuery::Black),
    ("where is black", ColorQuery::Black),
    ("where are white", ColorQuery::White),
    ("where is white", ColorQuery::White),
];

/// Piece words, including the mishearings the recognizer produces most. Scanned in order;
/// the first alias present decides the kind.
pub const PIECE_ALIASES: [(&str, PieceKind); 21] = [
    ("pawns", PieceKind::Pawn),
    ("knights", PieceKind::Knight),
    ("nights", PieceKind::Knight),
    ("night", PieceKind::Knight),
    ("lights", PieceKind::Knight),
    ("light", PieceKind::Knight),
    ("horses", PieceKind::Knight),
    ("horse", PieceKind::Knight),
    ("elephants", PieceKind::Rook),
    ("elephant", PieceKind::Rook),
    ("route", PieceKind::Rook),
    ("books", PieceKind::Rook),
    ("bishops", PieceKind::Bishop),
    ("rooks", PieceKind::Rook),
    ("queens", PieceKind::Queen),
    ("king", PieceKind::King),
    ("pawn", PieceKind::Pawn),
    ("knight", PieceKind::Knight),
    ("bishop", PieceKind::Bishop),
    ("rook", PieceKind::Rook),
    ("queen", PieceKind::Queen),
];

pub fn piece_alias(text: &str) -> Option<PieceKind> {
    PIECE_ALIASES
        .iter()
        .find(|(alias, _)| text.contains(alias))
        .map(|&(_, kind)| kind)
}

fn locate_pieces(text: &str) -> Option<Intent> {
    let (at, color) = LOCATE_PREFIXES
        .iter()
        .find_map(|&(prefix, color)| text.find(prefix).map(|i| (i + prefix.len(), color)))?;
    let kind = piece_alias(&text[at..])?;
    Some(Intent::QueryPiecesOfKind { color, kind })
}

const COUNT_WORDS: [(&str, u8); 10] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

fn count_word(word: &str) -> Option<u8> {
    COUNT_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, n)| n)
        .or_else(|| word.parse::<u8>().ok().filter(|n| (1..=10).contains(n)))
}

/// `last three moves`, `previous 2 moves`, `what were the last five moves`.
fn last_n_moves(text: &str) -> Option<Intent> {
    let words: Vec<&str> = text.split_whitespace().collect();
    words.windows(3).find_map(|w| match w {
        [lead, count, tail]
            if (*lead == "last" || *lead == "previous") && tail.starts_with("move") =>
        {
            count_word(count).map(|n| Intent::QueryLastNMoves { n })
        }
        _ => None,
    })
}

const LAST_MOVE_PHRASES: [&str; 6] = [
    "last move",
    "what was the last move",
    "opponent move",
    "opponent's move",
    "previous move",
    "say last",
];

fn last_move(text: &str) -> Option<Intent> {
    LAST_MOVE_PHRASES
        .iter()
        .any(|p| text.contains(p))
        .then_some(Intent::QueryLastMove)
}

const PIECE_AT_PREFIXES: [&str; 4] = ["what is on", "what's on", "which piece is on", "what is at"];

/// The square right after the prefix, written `e4`, `e 4` or `e four`.
fn piece_at(text: &str) -> Option<Intent> {
    let rest = PIECE_AT_PREFIXES
        .iter()
        .find_map(|p| text.find(p).map(|i| &text[i + p.len()..]))?;
    let spelled = spell_digits(rest);
    let words: Vec<&str> = spelled.split_whitespace().take(2).collect();
    let square = match words[..] {
        [] => None,
        [one] => Square::parse(one),
        [first, second] => {
            Square::parse(first).or_else(|| Square::parse(&format!("{first}{second}")))
        }
        _ => None,
    }?;
    Some(Intent::QueryPieceAt { square })
}

fn summary(text: &str) -> Option<Intent> {
    (text.contains("summary") || text.contains("summarize")).then_some(Intent::Summary)
}

const PROMOTION_TRIGGERS: [&str; 5] = ["promotes to", "promoting to", "promote to", "promote", "equals"];

/// Split off a trailing "promote to queen" clause so its letters don't pollute coordinate
/// extraction.
fn split_promotion(text: &str) -> (&str, Option<PieceKind>) {
    for trigger in PROMOTION_TRIGGERS {
        if let Some(i) = text.find(trigger) {
            let kind = piece_alias(&text[i + trigger.len()..])
                .filter(|k| !matches!(k, PieceKind::Pawn | PieceKind::King));
            return (&text[..i], kind);
        }
    }
    (text, None)
}

fn make_move(text: &str) -> Option<Intent> {
    let (head, promotion) = split_promotion(text);
    if let Some((from, to)) = extract_move(head) {
        debug!(uci = %format!("{from}{to}"), "extracted move");
        return Some(Intent::MakeMove {
            from: Some(from),
            to: Some(to),
            promotion,
        });
    }

    // A single coordinate is a move the recognizer half heard. After "to" it is the
    // destination.
    let tokens = coordinate_tokens(head);
    match tokens[..] {
        [only] if is_destination(head, only) => Some(Intent::MakeMove {
            from: None,
            to: Some(only),
            promotion,
        }),
        [only] => Some(Intent::MakeMove {
            from: Some(only),
            to: None,
            promotion,
        }),
        _ => None,
    }
}

fn is_destination(text: &str, square: Square) -> bool {
    let spelled = spell_digits(text);
    let mut after_to = false;
    for word in spelled.split_whitespace() {
        if Square::parse(word) == Some(square) {
            return after_to;
        }
        after_to = word == "to";
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn lone_square_after_to_is_the_destination() {
        let f3 = Square::parse("f3").unwrap();
        assert!(is_destination("knight to f3", f3));
        assert!(!is_destination("f3 knight", f3));
        assert!(!is_destination("to the f3", f3));
    }

    #[test]
    fn promotion_clause_is_split_off() {
        let (head, kind) = split_promotion("e7 to e8 promote to knight");
        assert_eq!(head.trim(), "e7 to e8");
        assert_eq!(kind, Some(PieceKind::Knight));
    }
}
