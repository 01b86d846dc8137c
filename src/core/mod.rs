//! Board vocabulary shared by every layer.
//!
//! These types know nothing about speech or about a particular rules engine:
//!
//! - [`square`]: a validated 8×8 coordinate packed into a single `u8`.
//! - [`piece`]: piece kinds, sides and the name table used for narration.
//! - [`moves`]: an engine-agnostic move whose UCI form is the wire format.

pub mod moves;
pub mod piece;
pub mod square;

pub use moves::ChessMove;
pub use piece::{Piece, PieceKind, Side};
pub use square::Square;
