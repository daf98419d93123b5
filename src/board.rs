use std::fmt;
use serde::Serializer;
use crate::board::Color::{Black, White};
use crate::square::Square;

pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PieceType {
    King,
    Rook,
    Bishop,
    Knight,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Color {
    White, Black
}

impl Color {
    pub fn opposite(&self) -> Color {
        if self == &White {
            Black
        } else {
            White
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Piece { color, kind }
    }

    fn letter(&self) -> char {
        let c = match self.kind {
            PieceType::King => 'K',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
        };
        if self.color == White { c } else { c.to_ascii_lowercase() }
    }

    fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (White, PieceType::King) => '\u{2654}',
            (White, PieceType::Rook) => '\u{2656}',
            (White, PieceType::Bishop) => '\u{2657}',
            (White, PieceType::Knight) => '\u{2658}',
            (Black, PieceType::King) => '\u{265A}',
            (Black, PieceType::Rook) => '\u{265C}',
            (Black, PieceType::Bishop) => '\u{265D}',
            (Black, PieceType::Knight) => '\u{265E}',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub squares: [[Option<Piece>; WIDTH]; HEIGHT],
}

impl Board {
    pub fn empty() -> Self {
        Board { squares: [[None; WIDTH]; HEIGHT] }
    }

    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row()][square.col()] = piece;
    }

    /// Moves whatever stands on `move_from` to `move_to`, dropping a captured piece.
    pub fn make_move(&mut self, move_from: Square, move_to: Square) {
        let piece = self.occupant(move_from);
        self.set(move_to, piece);
        self.set(move_from, None);
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.occupant(sq).map(|p| (sq, p)))
    }
}

pub fn to_string(board: &Board) -> String {
    let mut result: String = String::new();
    for row in (0 .. HEIGHT).rev() {
        for col in 0 .. WIDTH {
            let icon = match &board.squares[row][col] {
                None => '.',
                Some(p) => p.letter(),
            };
            result.push(icon);
        }
        result.push('\n');
    }
    let r = &result[0..result.len()-1];
    r.to_string()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "      a   b   c   d   e   f   g   h")?;
        for row in (0 .. HEIGHT).rev() {
            write!(f, "  {} |", row + 1)?;
            for col in 0 .. WIDTH {
                let icon = self.squares[row][col].map_or('_', |p| p.glyph());
                write!(f, " {} |", icon)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl serde::Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_str(to_string(self).as_str())
    }
}

// (row, kind) pairs filling files a-c for White, mirrored onto h-f for Black
const START_LAYOUT: [(usize, PieceType); 6] = [
    (0, PieceType::King),
    (1, PieceType::Rook),
    (0, PieceType::Bishop),
    (1, PieceType::Bishop),
    (0, PieceType::Knight),
    (1, PieceType::Knight),
];

pub fn new_board() -> Board {
    let mut board = Board::empty();
    for (i, (row, kind)) in START_LAYOUT.into_iter().enumerate() {
        let col = i / 2;
        board.squares[row][col] = Some(Piece::new(White, kind));
        board.squares[row][WIDTH - 1 - col] = Some(Piece::new(Black, kind));
    }
    board
}

#[cfg(test)]
mod test {
    use crate::board::{new_board, to_string, Board, Color, Piece, PieceType};
    use crate::board::Color::{Black, White};
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_layout() {
        let board = new_board();
        let expected = [
            ("a1", White, PieceType::King),
            ("a2", White, PieceType::Rook),
            ("b1", White, PieceType::Bishop),
            ("b2", White, PieceType::Bishop),
            ("c1", White, PieceType::Knight),
            ("c2", White, PieceType::Knight),
            ("h1", Black, PieceType::King),
            ("h2", Black, PieceType::Rook),
            ("g1", Black, PieceType::Bishop),
            ("g2", Black, PieceType::Bishop),
            ("f1", Black, PieceType::Knight),
            ("f2", Black, PieceType::Knight),
        ];
        for (s, color, kind) in expected {
            assert_eq!(board.occupant(sq(s)), Some(Piece::new(color, kind)), "{}", s);
        }
        assert_eq!(board.pieces().count(), 12);
        let empty = Square::all().filter(|&s| board.occupant(s).is_none()).count();
        assert_eq!(empty, 52);
    }

    #[test]
    fn test_make_move_captures() {
        let mut board = new_board();
        board.make_move(sq("a2"), sq("h2"));
        assert_eq!(board.occupant(sq("a2")), None);
        assert_eq!(board.occupant(sq("h2")), Some(Piece::new(White, PieceType::Rook)));
        assert_eq!(board.pieces().count(), 11);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = new_board();
        let mut copy = board.clone();
        copy.set(sq("a1"), None);
        assert_eq!(board.occupant(sq("a1")), Some(Piece::new(White, PieceType::King)));
        assert_eq!(copy.occupant(sq("a1")), None);
    }

    #[test]
    fn test_to_string() {
        let board = new_board();
        assert_eq!(to_string(&board), [
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "RBN..nbr",
            "KBN..nbk",
        ].join("\n"));
        assert_eq!(serde_json::to_string(&Board::empty()).unwrap(), format!("\"{}\"", ["........"; 8].join("\\n")));
    }

    #[test]
    fn test_display() {
        let rendered = new_board().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "      a   b   c   d   e   f   g   h");
        assert_eq!(lines[8], "  1 | \u{2654} | \u{2657} | \u{2658} | _ | _ | \u{265E} | \u{265D} | \u{265A} |");
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Color::White.opposite(), Black);
        assert_eq!(Color::Black.opposite(), White);
    }
}
