//! The rules-engine seam.
//!
//! The interpreter never decides chess legality itself. It talks to a [`RulesEngine`]:
//! [`BoardView`] is the read side handed to queries and narration, and
//! [`RulesEngine::push`] is the one mutating call, made only by the move-application step.
//!
//! [`StandardChess`] is the engine shipped with the crate (backed by `shakmaty`).

mod standard;

pub use standard::StandardChess;

use crate::core::{ChessMove, Piece, Side, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why a game ended.
pub enum GameOutcome {
    Checkmate { winner: Side },
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("move {0} is not legal in this position")]
pub struct RejectedMove(pub ChessMove);

/// Read access to a live position.
pub trait BoardView {
    fn piece_at(&self, sq: Square) -> Option<Piece>;

    fn legal_moves(&self) -> Vec<ChessMove>;

    /// True iff `mv` takes a piece (en passant included).
    fn is_capture(&self, mv: &ChessMove) -> bool;

    fn turn(&self) -> Side;

    fn is_check(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;
    fn is_seventyfive_moves(&self) -> bool;
    fn is_fivefold_repetition(&self) -> bool;

    /// Starts at 1 and increments after Black's move.
    fn fullmove_number(&self) -> u32;

    /// Every move played since the initial position, oldest first.
    fn history(&self) -> &[ChessMove];

    #[inline]
    fn is_legal(&self, mv: &ChessMove) -> bool {
        self.legal_moves().contains(mv)
    }

    fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// The reason the game is over, if it is. Checked in a fixed order so a position that
    /// satisfies several rules always reports the same one.
    fn outcome(&self) -> Option<GameOutcome> {
        if self.is_checkmate() {
            Some(GameOutcome::Checkmate {
                winner: self.turn().other(),
            })
        } else if self.is_stalemate() {
            Some(GameOutcome::Stalemate)
        } else if self.is_insufficient_material() {
            Some(GameOutcome::InsufficientMaterial)
        } else if self.is_seventyfive_moves() {
            Some(GameOutcome::SeventyFiveMoves)
        } else if self.is_fivefold_repetition() {
            Some(GameOutcome::FivefoldRepetition)
        } else {
            None
        }
    }

    /// Occupied squares in `a1..h8` order.
    fn pieces(&self) -> Vec<(Square, Piece)> {
        Square::all()
            .filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
            .collect()
    }
}

/// A [`BoardView`] that can also advance the game.
pub trait RulesEngine: BoardView {
    /// Play a legal move. Illegal moves are rejected and leave the position untouched.
    fn push(&mut self, mv: &ChessMove) -> Result<(), RejectedMove>;

    /// Return to the initial position and forget the history.
    fn reset(&mut self);

    /// A fresh engine at this engine's initial position (used to replay `history`).
    fn initial(&self) -> Self
    where
        Self: Sized;
}
