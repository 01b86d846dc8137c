//! Turning a classified [`Intent`] into an outcome against the live game.
//!
//! Queries only read the board. Moves go through [`GameState::apply_move`], which is the
//! single place that pushes to the engine and records captures.

use tracing::{debug, info};

use crate::core::{ChessMove, Piece, PieceKind, Side, Square};
use crate::narrate;
use crate::rules::{BoardView, GameOutcome, RejectedMove, RulesEngine};
use crate::speech::Intent;

/// Kind symbols taken by each side, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedSets {
    by_white: Vec<char>,
    by_black: Vec<char>,
}

impl CapturedSets {
    /// Record `taken` for whichever side captured it.
    pub fn record(&mut self, taken: Piece) {
        match taken.side {
            Side::Black => self.by_white.push(taken.kind.symbol()),
            Side::White => self.by_black.push(taken.kind.symbol()),
        }
    }

    pub fn by_white(&self) -> &[char] {
        &self.by_white
    }

    pub fn by_black(&self) -> &[char] {
        &self.by_black
    }

    pub fn clear(&mut self) {
        self.by_white.clear();
        self.by_black.clear();
    }
}

/// A move that was actually played, with everything the narrator needs afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: ChessMove,
    pub side: Side,
    pub captured: Option<Piece>,
    /// Described from the board before the move.
    pub description: String,
    pub is_check: bool,
    pub outcome: Option<GameOutcome>,
}

impl MoveRecord {
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }
}

pub struct GameState<E> {
    pub engine: E,
    pub captured: CapturedSets,
    pub last_opponent_move: Option<MoveRecord>,
    /// The side the speaker plays; `my` in queries means this side.
    pub user: Side,
}

impl<E: RulesEngine> GameState<E> {
    pub fn new(engine: E, user: Side) -> Self {
        Self {
            engine,
            captured: CapturedSets::default(),
            last_opponent_move: None,
            user,
        }
    }

    pub fn is_user_turn(&self) -> bool {
        self.engine.turn() == self.user
    }

    /// Back to the starting position with no captures and no remembered opponent move.
    pub fn new_game(&mut self) {
        self.engine.reset();
        self.captured.clear();
        self.last_opponent_move = None;
        info!("new game");
    }

    /// Play `mv` if legal. Captures are read off the pre-move board, so en passant is
    /// credited like any other capture.
    pub fn apply_move(&mut self, mv: &ChessMove) -> Result<MoveRecord, RejectedMove> {
        if !self.engine.is_legal(mv) {
            return Err(RejectedMove(*mv));
        }
        let side = self.engine.turn();
        let description = narrate::describe_move(&self.engine, mv);
        let captured = if self.engine.is_capture(mv) {
            captured_piece(&self.engine, mv)
        } else {
            None
        };

        self.engine.push(mv)?;
        if let Some(taken) = captured {
            self.captured.record(taken);
        }

        let record = MoveRecord {
            mv: *mv,
            side,
            captured,
            description,
            is_check: self.engine.is_check(),
            outcome: self.engine.outcome(),
        };
        info!(side = %side, mv = %mv, captured = ?captured.map(Piece::symbol), "move applied");
        Ok(record)
    }

    /// [`apply_move`](Self::apply_move), remembering the result for `last move` queries.
    pub fn apply_opponent_move(&mut self, mv: &ChessMove) -> Result<MoveRecord, RejectedMove> {
        let record = self.apply_move(mv)?;
        self.last_opponent_move = Some(record.clone());
        Ok(record)
    }
}

fn captured_piece<B: BoardView + ?Sized>(board: &B, mv: &ChessMove) -> Option<Piece> {
    board.piece_at(mv.to).or_else(|| {
        // En passant: the taken pawn sits beside the destination, on the mover's rank.
        Square::new(mv.to.file(), mv.from.rank()).and_then(|sq| board.piece_at(sq))
    })
}

/// The result of resolving one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAction {
    MoveApplied(MoveRecord),
    IllegalMove { from: Square, to: Square },
    QueryAnswer { text: String },
    /// A move was intended but one or both squares were not heard.
    MalformedCoordinates { heard: Option<Square> },
    Unrecognized { reason: String },
    Quit,
    NewGame,
    Help,
}

/// Resolve `intent` against `state`. Only a legal `MakeMove` changes the game.
pub fn resolve<E: RulesEngine>(intent: &Intent, state: &mut GameState<E>) -> ResolvedAction {
    debug!(?intent, "resolving");
    match intent {
        Intent::MakeMove { from, to, .. } => match intent.complete_move() {
            Some(mv) => {
                let mv = with_default_promotion(&state.engine, mv);
                match state.apply_move(&mv) {
                    Ok(record) => ResolvedAction::MoveApplied(record),
                    Err(RejectedMove(mv)) => ResolvedAction::IllegalMove {
                        from: mv.from,
                        to: mv.to,
                    },
                }
            }
            None => ResolvedAction::MalformedCoordinates {
                heard: (*from).or(*to),
            },
        },
        Intent::QueryPieceAt { square } => {
            answer(narrate::describe_piece_at(&state.engine, *square))
        }
        Intent::QueryPiecesOfKind { color, kind } => answer(narrate::describe_pieces_of_kind(
            &state.engine,
            *color,
            state.user,
            *kind,
        )),
        Intent::QueryAllMyPieces => answer(narrate::describe_census(&state.engine, state.user)),
        Intent::QueryLastMove => answer(narrate::describe_last_move(
            state
                .last_opponent_move
                .as_ref()
                .map(|r| r.description.as_str()),
        )),
        Intent::QueryLastNMoves { n } => {
            answer(narrate::describe_recent_moves(&state.engine, *n))
        }
        Intent::Summary => answer(narrate::describe_summary(
            &state.engine,
            state.captured.by_white(),
            state.captured.by_black(),
        )),
        Intent::Quit => ResolvedAction::Quit,
        Intent::NewGame => ResolvedAction::NewGame,
        Intent::Help => ResolvedAction::Help,
        Intent::Unrecognized { reason } => ResolvedAction::Unrecognized {
            reason: reason.clone(),
        },
    }
}

fn answer(text: String) -> ResolvedAction {
    ResolvedAction::QueryAnswer { text }
}

/// A pawn reaching the last rank with no piece named promotes to a queen.
fn with_default_promotion<B: BoardView + ?Sized>(board: &B, mv: ChessMove) -> ChessMove {
    if mv.promotion.is_some() || board.is_legal(&mv) {
        return mv;
    }
    let queen = mv.with_promotion(Some(PieceKind::Queen));
    if board.is_legal(&queen) {
        queen
    } else {
        mv
    }
}
