use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),
}

/// Reason a move was turned down by [`crate::Game::check_move`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("game is already over")]
    GameOver,
    #[error("no piece of the side to move on the origin square")]
    NotYourPiece,
    #[error("destination holds a piece of the side to move")]
    OwnPieceOnDestination,
    #[error("kings cannot be captured")]
    CapturesKing,
    #[error("piece cannot reach the destination")]
    InvalidPath,
    #[error("moved piece would attack the opponent king")]
    AttacksOpponentKing,
    #[error("own king would be left under attack")]
    ExposesOwnKing,
}
