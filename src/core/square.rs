use std::fmt;

pub const FILES: &str = "abcdefgh";
pub const RANKS: &str = "12345678";

/// A board square packed into a single `u8` (`a1 = 0`, `b1 = 1`, …, `h8 = 63`).
///
/// The only constructors validate their input, so every `Square` in the program is on the
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// `file` and `rank` are zero-based.
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Construct from a file letter (`a`..`h`, either case) and a rank digit (`1`..`8`).
    pub fn from_chars(file: char, rank: char) -> Option<Square> {
        let f = FILES.find(file.to_ascii_lowercase())?;
        let r = RANKS.find(rank)?;
        Square::new(f as u8, r as u8)
    }

    /// Parse a two-character token such as `e4`. Anything else is rejected.
    pub fn parse(token: &str) -> Option<Square> {
        let mut chars = token.chars();
        let (file, rank) = (chars.next()?, chars.next()?);
        if chars.next().is_some() {
            return None;
        }
        Square::from_chars(file, rank)
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    pub fn file_char(self) -> char {
        char::from(b'a' + self.file())
    }

    pub fn rank_char(self) -> char {
        char::from(b'1' + self.rank())
    }

    /// All 64 squares in `a1, b1, …, h8` order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// The form used in narration: `E4`.
    pub fn spoken(self) -> String {
        format!("{}{}", self.file_char().to_ascii_uppercase(), self.rank_char())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_on_board_pairs() {
        let e4 = Square::parse("e4").unwrap();
        assert_eq!((e4.file(), e4.rank()), (4, 3));
        assert_eq!(e4.to_string(), "e4");
        assert_eq!(e4.spoken(), "E4");

        assert_eq!(Square::parse("E4"), Some(e4));
        assert!(Square::parse("i4").is_none());
        assert!(Square::parse("e9").is_none());
        assert!(Square::parse("e0").is_none());
        assert!(Square::parse("e44").is_none());
        assert!(Square::parse("e").is_none());
    }

    #[test]
    fn all_runs_rank_by_rank() {
        let names: Vec<String> = Square::all().map(|s| s.to_string()).collect();
        assert_eq!(names.len(), 64);
        assert_eq!(names[0], "a1");
        assert_eq!(names[1], "b1");
        assert_eq!(names[8], "a2");
        assert_eq!(names[63], "h8");
    }
}
