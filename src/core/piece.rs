use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

struct KindNames {
    name: &'static str,
    display: &'static str,
    plural: &'static str,
    symbol: char,
}

/// Indexed by `PieceKind as usize`. Color-independent.
const KIND_NAMES: [KindNames; 6] = [
    KindNames { name: "pawn", display: "Pawn", plural: "pawns", symbol: 'P' },
    KindNames { name: "knight", display: "Knight", plural: "knights", symbol: 'N' },
    KindNames { name: "bishop", display: "Bishop", plural: "bishops", symbol: 'B' },
    KindNames { name: "rook", display: "Rook", plural: "rooks", symbol: 'R' },
    KindNames { name: "queen", display: "Queen", plural: "queens", symbol: 'Q' },
    KindNames { name: "king", display: "King", plural: "kings", symbol: 'K' },
];

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    fn names(self) -> &'static KindNames {
        &KIND_NAMES[self as usize]
    }

    /// Lowercase singular: `knight`.
    pub fn name(self) -> &'static str {
        self.names().name
    }

    /// Capitalized singular: `Knight`.
    pub fn display_name(self) -> &'static str {
        self.names().display
    }

    pub fn plural(self) -> &'static str {
        self.names().plural
    }

    /// Uppercase symbol: `N`.
    pub fn symbol(self) -> char {
        self.names().symbol
    }

    pub fn from_symbol(c: char) -> Option<PieceKind> {
        let upper = c.to_ascii_uppercase();
        PieceKind::ALL.into_iter().find(|k| k.symbol() == upper)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    /// FEN-style symbol: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        match self.side {
            Side::White => self.kind.symbol(),
            Side::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}
