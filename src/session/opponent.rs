use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::Opponent;
use crate::core::ChessMove;

/// Plays a uniformly random legal move.
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Seeded opponents replay the same game given the same user moves.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self, legal: &[ChessMove]) -> Option<ChessMove> {
        legal.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{BoardView, StandardChess};

    #[test]
    fn same_seed_same_choice() {
        let legal = StandardChess::new().legal_moves();
        let a = RandomOpponent::new(Some(7)).choose(&legal);
        let b = RandomOpponent::new(Some(7)).choose(&legal);
        assert_eq!(a, b);
        assert!(legal.contains(&a.unwrap()));
    }

    #[test]
    fn nothing_to_choose_from() {
        assert_eq!(RandomOpponent::new(Some(1)).choose(&[]), None);
    }
}
