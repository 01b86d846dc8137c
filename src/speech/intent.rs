use crate::core::{ChessMove, PieceKind, Side, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Whose pieces a locational query is about.
pub enum ColorQuery {
    Mine,
    White,
    Black,
}

impl ColorQuery {
    /// Resolve against the side the user is playing.
    pub fn side(self, user: Side) -> Side {
        match self {
            ColorQuery::Mine => user,
            ColorQuery::White => Side::White,
            ColorQuery::Black => Side::Black,
        }
    }
}

/// The classified purpose of one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Either square may be missing when the transcript only carried part of a move.
    MakeMove {
        from: Option<Square>,
        to: Option<Square>,
        promotion: Option<PieceKind>,
    },
    QueryPieceAt {
        square: Square,
    },
    QueryPiecesOfKind {
        color: ColorQuery,
        kind: PieceKind,
    },
    QueryAllMyPieces,
    QueryLastMove,
    QueryLastNMoves {
        n: u8,
    },
    Summary,
    Quit,
    NewGame,
    Help,
    Unrecognized {
        reason: String,
    },
}

impl Intent {
    pub fn make_move(from: Square, to: Square) -> Self {
        Intent::MakeMove {
            from: Some(from),
            to: Some(to),
            promotion: None,
        }
    }

    /// The move to try, if this is a `MakeMove` with both squares present.
    pub fn complete_move(&self) -> Option<ChessMove> {
        match *self {
            Intent::MakeMove {
                from: Some(from),
                to: Some(to),
                promotion,
            } => Some(ChessMove::new(from, to).with_promotion(promotion)),
            _ => None,
        }
    }
}
