use rustc_hash::FxHashMap;
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Rank, Role};

use crate::core::{ChessMove, Piece, PieceKind, Side, Square};
use crate::error::Error;
use crate::rules::{BoardView, RejectedMove, RulesEngine};

/// Halfmoves without a capture or pawn move after which the game is drawn.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;
const FIVEFOLD: u32 = 5;

/// Orthodox chess, backed by `shakmaty`.
///
/// `shakmaty` does not keep a move stack, so we record the history and a repetition table
/// (keyed by Zobrist hash) ourselves.
#[derive(Debug, Clone)]
pub struct StandardChess {
    start: Chess,
    pos: Chess,
    history: Vec<ChessMove>,
    seen: FxHashMap<Zobrist64, u32>,
}

impl Default for StandardChess {
    fn default() -> Self {
        Self::from_position(Chess::default())
    }
}

impl StandardChess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> Result<Self, Error> {
        let parsed = fen.parse::<Fen>().map_err(|e| Error::Fen {
            fen: fen.to_string(),
            reason: e.to_string(),
        })?;
        let pos: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| Error::Fen {
                fen: fen.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::from_position(pos))
    }

    fn from_position(pos: Chess) -> Self {
        let mut seen = FxHashMap::default();
        seen.insert(repetition_key(&pos), 1);
        Self {
            start: pos.clone(),
            pos,
            history: Vec::new(),
            seen,
        }
    }

    pub fn position(&self) -> &Chess {
        &self.pos
    }

    fn find_legal(&self, mv: &ChessMove) -> Option<Move> {
        self.pos
            .legal_moves()
            .into_iter()
            .find(|m| to_chess_move(m).as_ref() == Some(mv))
    }
}

impl BoardView for StandardChess {
    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.pos.board().piece_at(to_shakmaty_square(sq)).map(|p| Piece {
            side: side_of(p.color),
            kind: kind_of(p.role),
        })
    }

    fn legal_moves(&self) -> Vec<ChessMove> {
        self.pos
            .legal_moves()
            .iter()
            .filter_map(to_chess_move)
            .collect()
    }

    fn is_capture(&self, mv: &ChessMove) -> bool {
        match self.find_legal(mv) {
            Some(m) => m.is_capture(),
            None => self
                .piece_at(mv.to)
                .map_or(false, |p| p.side != self.turn()),
        }
    }

    fn turn(&self) -> Side {
        side_of(self.pos.turn())
    }

    fn is_check(&self) -> bool {
        self.pos.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.pos.is_stalemate()
    }

    fn is_insufficient_material(&self) -> bool {
        self.pos.is_insufficient_material()
    }

    fn is_seventyfive_moves(&self) -> bool {
        self.pos.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
    }

    fn is_fivefold_repetition(&self) -> bool {
        self.seen
            .get(&repetition_key(&self.pos))
            .map_or(false, |&n| n >= FIVEFOLD)
    }

    fn fullmove_number(&self) -> u32 {
        self.pos.fullmoves().get()
    }

    fn history(&self) -> &[ChessMove] {
        &self.history
    }
}

impl RulesEngine for StandardChess {
    fn push(&mut self, mv: &ChessMove) -> Result<(), RejectedMove> {
        let m = self.find_legal(mv).ok_or(RejectedMove(*mv))?;
        self.pos.play_unchecked(&m);
        self.history.push(*mv);
        *self.seen.entry(repetition_key(&self.pos)).or_insert(0) += 1;
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::from_position(self.start.clone());
    }

    fn initial(&self) -> Self {
        Self::from_position(self.start.clone())
    }
}

fn repetition_key(pos: &Chess) -> Zobrist64 {
    pos.zobrist_hash(EnPassantMode::Legal)
}

fn to_chess_move(m: &Move) -> Option<ChessMove> {
    match m.to_uci(CastlingMode::Standard) {
        UciMove::Normal {
            from,
            to,
            promotion,
        } => Some(ChessMove {
            from: from_shakmaty_square(from)?,
            to: from_shakmaty_square(to)?,
            promotion: promotion.map(kind_of),
        }),
        _ => None,
    }
}

fn to_shakmaty_square(sq: Square) -> shakmaty::Square {
    shakmaty::Square::from_coords(File::new(u32::from(sq.file())), Rank::new(u32::from(sq.rank())))
}

fn from_shakmaty_square(sq: shakmaty::Square) -> Option<Square> {
    Square::from_chars(sq.file().char(), sq.rank().char())
}

fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn kind_of(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(uci: &str) -> ChessMove {
        ChessMove::from_uci(uci).unwrap()
    }

    #[test]
    fn castling_is_reported_king_to_king() {
        let mut g = StandardChess::new();
        for m in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
            g.push(&mv(m)).unwrap();
        }
        assert!(g.legal_moves().contains(&mv("e1g1")));
        g.push(&mv("e1g1")).unwrap();
        let rook = g.piece_at(Square::parse("f1").unwrap()).unwrap();
        assert_eq!(rook.kind, PieceKind::Rook);
    }

    #[test]
    fn knight_shuffle_reaches_fivefold() {
        let mut g = StandardChess::new();
        let cycle = ["g1f3", "g8f6", "f3g1", "f6g8"];
        for _ in 0..4 {
            for m in cycle {
                assert!(!g.is_fivefold_repetition());
                g.push(&mv(m)).unwrap();
            }
        }
        assert!(g.is_fivefold_repetition());
        assert!(g.is_game_over());
    }

    #[test]
    fn bad_fen_is_reported() {
        let err = StandardChess::from_fen("not a position").unwrap_err();
        assert!(matches!(err, Error::Fen { .. }));
        let g = StandardChess::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(g.turn(), Side::Black);
    }

    #[test]
    fn illegal_push_is_rejected() {
        let mut g = StandardChess::new();
        assert_eq!(g.push(&mv("e2e5")), Err(RejectedMove(mv("e2e5"))));
        assert!(g.history().is_empty());
    }
}
