use std::fmt;

use crate::core::piece::PieceKind;
use crate::core::square::Square;

/// A move as the rules engine and the interpreter agree on it.
///
/// Castling is written king-from → king-to (`e1g1`), matching UCI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, kind: Option<PieceKind>) -> Self {
        self.promotion = kind;
        self
    }

    /// Parse `e2e4` / `e7e8q`.
    pub fn from_uci(uci: &str) -> Option<ChessMove> {
        if !uci.is_ascii() || !(4..=5).contains(&uci.len()) {
            return None;
        }
        let from = Square::parse(&uci[0..2])?;
        let to = Square::parse(&uci[2..4])?;
        let promotion = match uci[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_symbol(c)? {
                PieceKind::Pawn | PieceKind::King => return None,
                kind => Some(kind),
            },
        };
        Some(ChessMove { from, to, promotion })
    }

    pub fn uci(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.symbol().to_ascii_lowercase())?;
        }
        Ok(())
    }
}
