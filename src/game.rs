use crate::board::{new_board, Board, Color, Piece, PieceType};
use crate::board::Color::{Black, White};
use crate::error::{ChessError, IllegalMove};
use crate::moves::{attacks_opponent_king, can_reach, exposes_own_king, king_square};
use crate::square::Square;

const GOAL_ROW: usize = 7;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameStatus {
    Unfinished,
    WhiteWon,
    BlackWon,
    Tie,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::Unfinished
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::WhiteWon => Some(White),
            GameStatus::BlackWon => Some(Black),
            GameStatus::Unfinished | GameStatus::Tie => None,
        }
    }
}

/// A single game of the king race: the board, the side to move and the result.
///
/// State only changes through [`Game::make_move`]; a rejected move leaves
/// everything as it was.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game { board: new_board(), turn: White, status: GameStatus::Unfinished }
    }

    /// Starts from an arbitrary position with `turn` to move.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game { board, turn, status: GameStatus::Unfinished }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.board.occupant(square)
    }

    /// Checks every rule for `move_from -> move_to` without touching the game.
    pub fn check_move(&self, move_from: Square, move_to: Square) -> Result<(), IllegalMove> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver);
        }
        match self.board.occupant(move_from) {
            Some(p) if p.color == self.turn => {}
            _ => return Err(IllegalMove::NotYourPiece),
        }
        match self.board.occupant(move_to) {
            Some(p) if p.color == self.turn => return Err(IllegalMove::OwnPieceOnDestination),
            Some(p) if p.kind == PieceType::King => return Err(IllegalMove::CapturesKing),
            _ => {}
        }
        if !can_reach(&self.board, move_from, move_to) {
            return Err(IllegalMove::InvalidPath);
        }
        if attacks_opponent_king(&self.board, move_from, move_to) {
            return Err(IllegalMove::AttacksOpponentKing);
        }
        if exposes_own_king(&self.board, move_from, move_to) {
            return Err(IllegalMove::ExposesOwnKing);
        }
        Ok(())
    }

    /// Plays the move if it is legal, otherwise says why it was turned down.
    pub fn play(&mut self, move_from: Square, move_to: Square) -> Result<(), IllegalMove> {
        if let Err(reason) = self.check_move(move_from, move_to) {
            log::debug!("{:?} {} -> {} rejected: {}", self.turn, move_from, move_to, reason);
            return Err(reason);
        }

        self.board.make_move(move_from, move_to);
        log::debug!("{:?} played {} -> {}", self.turn, move_from, move_to);

        if self.turn == Black {
            self.update_status();
        }
        self.turn = self.turn.opposite();
        Ok(())
    }

    /// Plays the move if it is legal. Returns whether it was played.
    pub fn make_move(&mut self, move_from: Square, move_to: Square) -> bool {
        self.play(move_from, move_to).is_ok()
    }

    /// Same as [`Game::make_move`] with squares given as `"e4"` style coordinates.
    pub fn try_move(&mut self, move_from: &str, move_to: &str) -> Result<bool, ChessError> {
        let move_from: Square = move_from.parse()?;
        let move_to: Square = move_to.parse()?;
        Ok(self.make_move(move_from, move_to))
    }

    // Only evaluated after Black's move, so a White king reaching the last
    // rank is reported once Black has replied.
    fn update_status(&mut self) {
        let on_goal = |color| king_square(&self.board, color).is_some_and(|k| k.row() == GOAL_ROW);
        let status = match (on_goal(White), on_goal(Black)) {
            (false, true) => GameStatus::BlackWon,
            (true, true) => GameStatus::Tie,
            (true, false) => GameStatus::WhiteWon,
            (false, false) => GameStatus::Unfinished,
        };
        if status != self.status {
            log::info!("Game over: {:?}", status);
            self.status = status;
        }
    }
}
