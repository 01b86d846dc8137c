//! Natural-language renderings of moves, queries and game state.
//!
//! Every function here is deterministic in its arguments. Board positions are always passed
//! in explicitly; in particular a move is described from the board *before* it was played.

use crate::core::{ChessMove, PieceKind, Side, Square};
use crate::rules::{BoardView, GameOutcome, RulesEngine};
use crate::speech::ColorQuery;

pub const WELCOME: &str = "Welcome to Voice Chess. Say your move, or ask for help.";

pub const HELP: &str = "Say your moves like 'E2 to E4'. Ask 'where are my knights', \
'what is on D4', 'what was the last move' or 'last three moves'. \
Say 'summary' for a game summary, 'new game' to start over, or 'quit' to exit.";

pub const PROMPT: &str = "Please say your move.";

/// `Pawn moves from E2 to E4`, `Knight captures at D5`,
/// `Pawn moves from E7 to E8 and promotes to Q`.
pub fn describe_move<B: BoardView + ?Sized>(pre: &B, mv: &ChessMove) -> String {
    let Some(piece) = pre.piece_at(mv.from) else {
        return "Unable to describe the move.".to_string();
    };
    let name = piece.kind.display_name();
    let (from, to) = (mv.from.spoken(), mv.to.spoken());

    if let Some(promo) = mv.promotion {
        return format!(
            "{name} moves from {from} to {to} and promotes to {}",
            promo.symbol()
        );
    }
    let occupied_by_opponent = pre.piece_at(mv.to).map_or(false, |p| p.side != piece.side);
    if occupied_by_opponent || pre.is_capture(mv) {
        format!("{name} captures at {to}")
    } else {
        format!("{name} moves from {from} to {to}")
    }
}

pub fn describe_outcome(outcome: Option<GameOutcome>) -> &'static str {
    match outcome {
        Some(GameOutcome::Checkmate { .. }) => "Checkmate! Game over.",
        Some(GameOutcome::Stalemate) => "Stalemate! It's a draw.",
        Some(GameOutcome::InsufficientMaterial) => "Draw due to insufficient material.",
        Some(GameOutcome::SeventyFiveMoves) => "Draw due to seventy-five move rule.",
        Some(GameOutcome::FivefoldRepetition) => "Draw due to fivefold repetition.",
        None => "Game over.",
    }
}

pub fn describe_game_over<B: BoardView + ?Sized>(board: &B) -> &'static str {
    describe_outcome(board.outcome())
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn capture_line(side: Side, captured: &[char]) -> String {
    let list = if captured.is_empty() {
        "none".to_string()
    } else {
        captured
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{side} has captured {}: {list}.",
        plural(captured.len(), "piece", "pieces")
    )
}

/// Move count, captures per side, whose turn, check/mate/stalemate and material on board.
pub fn describe_summary<B: BoardView + ?Sized>(
    board: &B,
    captured_by_white: &[char],
    captured_by_black: &[char],
) -> String {
    let turn = board.turn();
    let mut parts = vec![
        format!(
            "The game has progressed {}.",
            plural(board.fullmove_number() as usize, "full move", "full moves")
        ),
        capture_line(Side::White, captured_by_white),
        capture_line(Side::Black, captured_by_black),
        format!("It is now {turn}'s turn."),
    ];

    if board.is_checkmate() {
        parts.push(format!("Checkmate! {} has won.", turn.other()));
    } else if board.is_stalemate() {
        parts.push("The game ended in a stalemate.".to_string());
    } else if board.is_check() {
        parts.push(format!("{turn} is currently in check."));
    }

    let pieces = board.pieces();
    for side in [Side::White, Side::Black] {
        let n = pieces.iter().filter(|(_, p)| p.side == side).count();
        parts.push(format!(
            "{side} has {} on the board.",
            plural(n, "piece", "pieces")
        ));
    }
    parts.join(" ")
}

pub fn describe_piece_at<B: BoardView + ?Sized>(board: &B, square: Square) -> String {
    match board.piece_at(square) {
        Some(p) => format!(
            "There is a {} {} on {}",
            p.side,
            p.kind.name(),
            square.spoken()
        ),
        None => format!("There is no piece on {}", square.spoken()),
    }
}

pub fn describe_pieces_of_kind<B: BoardView + ?Sized>(
    board: &B,
    color: ColorQuery,
    user: Side,
    kind: PieceKind,
) -> String {
    let side = color.side(user);
    let squares: Vec<String> = board
        .pieces()
        .into_iter()
        .filter(|(_, p)| p.side == side && p.kind == kind)
        .map(|(sq, _)| sq.spoken())
        .collect();

    let owner = match color {
        ColorQuery::Mine => "Your".to_string(),
        _ => format!("The {side}"),
    };
    match squares.as_slice() {
        [] => match color {
            ColorQuery::Mine => format!("You have no {} on the board", kind.plural()),
            _ => format!("There are no {side} {} on the board", kind.plural()),
        },
        [only] => format!("{owner} {} is on {only}", kind.name()),
        many => format!("{owner} {} are on: {}", kind.plural(), many.join(", ")),
    }
}

/// `You have: 8 pawns, 2 knights, …, 1 king`, in piece-kind order.
pub fn describe_census<B: BoardView + ?Sized>(board: &B, side: Side) -> String {
    let pieces = board.pieces();
    let counts: Vec<String> = PieceKind::ALL
        .iter()
        .filter_map(|&kind| {
            let n = pieces
                .iter()
                .filter(|(_, p)| p.side == side && p.kind == kind)
                .count();
            (n > 0).then(|| plural(n, kind.name(), kind.plural()))
        })
        .collect();

    if counts.is_empty() {
        "You have no pieces left.".to_string()
    } else {
        format!("You have: {}", counts.join(", "))
    }
}

pub fn describe_last_move(last: Option<&str>) -> String {
    match last {
        Some(desc) => format!("Opponent's last move was: {desc}"),
        None => "No move made by opponent yet.".to_string(),
    }
}

/// The last `n` full moves (`2n` plies), replayed from the engine's initial position so
/// each one is described from the board it was played on.
pub fn describe_recent_moves<E: RulesEngine>(engine: &E, n: u8) -> String {
    let history = engine.history();
    if history.is_empty() {
        return "No moves have been made yet.".to_string();
    }
    let start = history.len().saturating_sub(usize::from(n) * 2);

    let mut replay = engine.initial();
    let mut lines = Vec::new();
    for (i, mv) in history.iter().enumerate() {
        if i >= start {
            lines.push(format!("{}: {}", replay.turn(), describe_move(&replay, mv)));
        }
        if replay.push(mv).is_err() {
            break;
        }
    }
    lines.join(". ")
}
