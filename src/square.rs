use std::fmt;
use std::str::FromStr;

use crate::board::{HEIGHT, WIDTH};
use crate::error::ChessError;

const FILES: &[u8; WIDTH] = b"abcdefgh";

/// Board coordinate. `row` is the rank minus one, `col` the file index (a = 0).
///
/// Always on the board; every constructor checks bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Result<Self, ChessError> {
        if row < HEIGHT && col < WIDTH {
            Ok(Square { row, col })
        } else {
            Err(ChessError::InvalidSquare(format!("({}, {})", row, col)))
        }
    }

    pub fn from_coords(row: i8, col: i8) -> Option<Self> {
        if row >= 0 && col >= 0 && row < HEIGHT as i8 && col < WIDTH as i8 {
            Some(Square { row: row as usize, col: col as usize })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..HEIGHT).flat_map(|r| (0..WIDTH).map(move |c| Square { row: r, col: c }))
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn rank(&self) -> usize {
        self.row + 1
    }

    pub fn file(&self) -> char {
        FILES[self.col] as char
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[f, r] if FILES.contains(&f) && (b'1'..=b'8').contains(&r) => {
                Ok(Square { row: (r - b'1') as usize, col: (f - b'a') as usize })
            }
            _ => Err(ChessError::InvalidSquare(s.to_string())),
        }
    }
}

impl TryFrom<String> for Square {
    type Error = ChessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
