pub mod board;
pub mod square;
pub mod moves;
pub mod game;
pub mod error;
pub mod communication_protocol;

pub use board::{Board, Color, Piece, PieceType};
pub use error::{ChessError, IllegalMove};
pub use game::{Game, GameStatus};
pub use square::Square;
