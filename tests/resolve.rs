use voice_chess::core::{ChessMove, PieceKind, Side, Square};
use voice_chess::resolve::{resolve, GameState, ResolvedAction};
use voice_chess::rules::{BoardView, StandardChess};
use voice_chess::speech::{ColorQuery, Intent};

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

fn new_game() -> GameState<StandardChess> {
    GameState::new(StandardChess::new(), Side::White)
}

fn play(state: &mut GameState<StandardChess>, moves: &[&str]) {
    for m in moves {
        let mv = ChessMove::from_uci(m).unwrap();
        state.apply_move(&mv).unwrap();
    }
}

fn answer(action: ResolvedAction) -> String {
    match action {
        ResolvedAction::QueryAnswer { text } => text,
        other => panic!("expected an answer, got {other:?}"),
    }
}

#[test]
fn legal_move_is_applied_and_described() {
    let mut state = new_game();
    let action = resolve(&Intent::make_move(sq("e2"), sq("e4")), &mut state);
    let ResolvedAction::MoveApplied(record) = action else {
        panic!("expected a move, got {action:?}");
    };
    assert_eq!(record.description, "Pawn moves from E2 to E4");
    assert_eq!(record.side, Side::White);
    assert_eq!(record.captured, None);
    assert!(!record.is_check);
    assert_eq!(state.engine.turn(), Side::Black);
    assert_eq!(state.engine.history().len(), 1);
}

#[test]
fn illegal_move_leaves_the_board_alone() {
    let mut state = new_game();
    let action = resolve(&Intent::make_move(sq("e2"), sq("e5")), &mut state);
    assert_eq!(
        action,
        ResolvedAction::IllegalMove {
            from: sq("e2"),
            to: sq("e5")
        }
    );
    assert!(state.engine.history().is_empty());
    assert_eq!(state.engine.turn(), Side::White);
    assert_eq!(
        state.engine.piece_at(sq("e2")).map(|p| p.kind),
        Some(PieceKind::Pawn)
    );
}

#[test]
fn capture_is_credited_from_the_pre_move_board() {
    let mut state = new_game();
    play(&mut state, &["e2e4", "d7d5"]);
    let action = resolve(&Intent::make_move(sq("e4"), sq("d5")), &mut state);
    let ResolvedAction::MoveApplied(record) = action else {
        panic!("expected a move, got {action:?}");
    };
    assert_eq!(record.description, "Pawn captures at D5");
    assert_eq!(record.captured.map(|p| p.side), Some(Side::Black));
    assert_eq!(state.captured.by_white(), &['P']);
    assert!(state.captured.by_black().is_empty());
}

#[test]
fn black_captures_land_in_blacks_list() {
    let mut state = new_game();
    play(&mut state, &["e2e4", "d7d5", "g1f3"]);
    let ResolvedAction::MoveApplied(record) =
        resolve(&Intent::make_move(sq("d5"), sq("e4")), &mut state)
    else {
        panic!("expected a move");
    };
    assert_eq!(record.side, Side::Black);
    assert_eq!(record.description, "Pawn captures at E4");
    assert_eq!(state.captured.by_black(), &['P']);
    assert!(state.captured.by_white().is_empty());
}

#[test]
fn en_passant_is_a_capture() {
    let mut state = new_game();
    play(&mut state, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let action = resolve(&Intent::make_move(sq("e5"), sq("d6")), &mut state);
    let ResolvedAction::MoveApplied(record) = action else {
        panic!("expected a move, got {action:?}");
    };
    assert_eq!(record.description, "Pawn captures at D6");
    assert_eq!(state.captured.by_white(), &['P']);
    assert_eq!(state.engine.piece_at(sq("d5")), None);
}

#[test]
fn bare_promotion_defaults_to_queen() {
    let engine = StandardChess::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let mut state = GameState::new(engine, Side::White);
    let action = resolve(&Intent::make_move(sq("e7"), sq("e8")), &mut state);
    let ResolvedAction::MoveApplied(record) = action else {
        panic!("expected a move, got {action:?}");
    };
    assert_eq!(record.mv.promotion, Some(PieceKind::Queen));
    assert_eq!(
        record.description,
        "Pawn moves from E7 to E8 and promotes to Q"
    );
}

#[test]
fn spoken_underpromotion_is_kept() {
    let engine = StandardChess::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let mut state = GameState::new(engine, Side::White);
    let intent = Intent::MakeMove {
        from: Some(sq("e7")),
        to: Some(sq("e8")),
        promotion: Some(PieceKind::Knight),
    };
    let ResolvedAction::MoveApplied(record) = resolve(&intent, &mut state) else {
        panic!("expected a move");
    };
    assert_eq!(
        state.engine.piece_at(sq("e8")).map(|p| p.kind),
        Some(PieceKind::Knight)
    );
    assert!(record.description.ends_with("promotes to N"));
}

#[test]
fn partial_move_is_malformed() {
    let mut state = new_game();
    let intent = Intent::MakeMove {
        from: Some(sq("f3")),
        to: None,
        promotion: None,
    };
    assert_eq!(
        resolve(&intent, &mut state),
        ResolvedAction::MalformedCoordinates {
            heard: Some(sq("f3"))
        }
    );
    assert!(state.engine.history().is_empty());
}

#[test]
fn queries_read_without_writing() {
    let mut state = new_game();
    assert_eq!(
        answer(resolve(&Intent::QueryPieceAt { square: sq("e2") }, &mut state)),
        "There is a White pawn on E2"
    );
    assert_eq!(
        answer(resolve(&Intent::QueryPieceAt { square: sq("e4") }, &mut state)),
        "There is no piece on E4"
    );
    assert_eq!(
        answer(resolve(
            &Intent::QueryPiecesOfKind {
                color: ColorQuery::Mine,
                kind: PieceKind::Knight
            },
            &mut state
        )),
        "Your knights are on: B1, G1"
    );
    assert_eq!(
        answer(resolve(
            &Intent::QueryPiecesOfKind {
                color: ColorQuery::Black,
                kind: PieceKind::King
            },
            &mut state
        )),
        "The Black king is on E8"
    );
    assert_eq!(
        answer(resolve(&Intent::QueryAllMyPieces, &mut state)),
        "You have: 8 pawns, 2 knights, 2 bishops, 2 rooks, 1 queen, 1 king"
    );
    assert!(state.engine.history().is_empty());
}

#[test]
fn my_pieces_follow_the_user_side() {
    let mut state = GameState::new(StandardChess::new(), Side::Black);
    let text = answer(resolve(
        &Intent::QueryPiecesOfKind {
            color: ColorQuery::Mine,
            kind: PieceKind::Knight,
        },
        &mut state,
    ));
    assert_eq!(text, "Your knights are on: B8, G8");
}

#[test]
fn last_move_is_the_opponents() {
    let mut state = new_game();
    assert_eq!(
        answer(resolve(&Intent::QueryLastMove, &mut state)),
        "No move made by opponent yet."
    );
    play(&mut state, &["e2e4"]);
    let reply = ChessMove::from_uci("g8f6").unwrap();
    state.apply_opponent_move(&reply).unwrap();
    assert_eq!(
        answer(resolve(&Intent::QueryLastMove, &mut state)),
        "Opponent's last move was: Knight moves from G8 to F6"
    );
}

#[test]
fn recent_moves_replay_history() {
    let mut state = new_game();
    assert_eq!(
        answer(resolve(&Intent::QueryLastNMoves { n: 3 }, &mut state)),
        "No moves have been made yet."
    );
    play(&mut state, &["e2e4", "e7e5", "g1f3"]);
    assert_eq!(
        answer(resolve(&Intent::QueryLastNMoves { n: 1 }, &mut state)),
        "Black: Pawn moves from E7 to E5. White: Knight moves from G1 to F3"
    );
    let all = answer(resolve(&Intent::QueryLastNMoves { n: 10 }, &mut state));
    assert!(all.starts_with("White: Pawn moves from E2 to E4"));
}

#[test]
fn new_game_forgets_everything() {
    let mut state = new_game();
    play(&mut state, &["e2e4", "d7d5", "e4d5"]);
    state.new_game();
    assert!(state.engine.history().is_empty());
    assert!(state.captured.by_white().is_empty());
    assert!(state.last_opponent_move.is_none());
    assert_eq!(resolve(&Intent::NewGame, &mut state), ResolvedAction::NewGame);
}
