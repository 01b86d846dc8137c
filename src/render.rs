//! ASCII board for the console front end.

use crate::core::{ChessMove, Square};
use crate::rules::BoardView;

/// Rank 8 at the top, `.` for empty squares. Squares of `last` are bracketed.
pub fn render_board<B: BoardView + ?Sized>(board: &B, last: Option<&ChessMove>) -> String {
    let mut out = String::new();
    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');
        for file in 0..8u8 {
            let Some(sq) = Square::new(file, rank) else {
                continue;
            };
            let c = board.piece_at(sq).map_or('.', |p| p.symbol());
            let marked = last.map_or(false, |mv| mv.from == sq || mv.to == sq);
            if marked {
                out.push('[');
                out.push(c);
                out.push(']');
            } else {
                out.push(' ');
                out.push(c);
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out
}
