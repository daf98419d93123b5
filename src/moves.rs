use crate::board::{Board, Color, PieceType};
use crate::square::Square;

fn deltas(from: Square, to: Square) -> (i8, i8) {
    (to.row() as i8 - from.row() as i8, to.col() as i8 - from.col() as i8)
}

// Squares strictly between `from` and `to`, stepping by `vec`.
fn path_is_clear(board: &Board, from: Square, to: Square, vec: &[i8; 2]) -> bool {
    let mut n_row = from.row() as i8 + vec[0];
    let mut n_col = from.col() as i8 + vec[1];
    while let Some(square) = Square::from_coords(n_row, n_col) {
        if square == to {
            return true;
        }
        if board.occupant(square).is_some() {
            return false;
        }
        n_row += vec[0];
        n_col += vec[1];
    }
    false
}

fn move_straight(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    if (d_row == 0) == (d_col == 0) {
        return false;
    }
    path_is_clear(board, from, to, &[d_row.signum(), d_col.signum()])
}

fn move_diagonally(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    if d_row == 0 || d_row.abs() != d_col.abs() {
        return false;
    }
    path_is_clear(board, from, to, &[d_row.signum(), d_col.signum()])
}

fn move_knight(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}

fn move_king(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0)
}

/// Whether the piece on `from` could move to `to` by its own movement rule.
///
/// Only geometry and blocking pieces are considered; the color of whatever
/// stands on `to` is left to the caller.
pub fn can_reach(board: &Board, from: Square, to: Square) -> bool {
    match board.occupant(from) {
        None => false,
        Some(p) => match p.kind {
            PieceType::Rook => move_straight(board, from, to),
            PieceType::Bishop => move_diagonally(board, from, to),
            PieceType::Knight => move_knight(from, to),
            PieceType::King => move_king(from, to),
        }
    }
}

pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.pieces()
        .find(|(_, p)| p.color == color && p.kind == PieceType::King)
        .map(|(square, _)| square)
}

/// Whether any piece of color `by` could move onto `square`.
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    board.pieces()
        .filter(|(_, p)| p.color == by)
        .any(|(from, _)| can_reach(board, from, square))
}

fn simulate(board: &Board, from: Square, to: Square) -> Board {
    let mut new_board = board.clone();
    new_board.make_move(from, to);
    new_board
}

/// After playing `from -> to`, could the moved piece take the opponent king?
pub fn attacks_opponent_king(board: &Board, from: Square, to: Square) -> bool {
    let color = match board.occupant(from) {
        None => return false,
        Some(p) => p.color,
    };
    let new_board = simulate(board, from, to);
    match king_square(&new_board, color.opposite()) {
        None => false,
        Some(king) => can_reach(&new_board, to, king),
    }
}

/// After playing `from -> to`, could any opponent piece take the mover's king?
pub fn exposes_own_king(board: &Board, from: Square, to: Square) -> bool {
    let color = match board.occupant(from) {
        None => return false,
        Some(p) => p.color,
    };
    let new_board = simulate(board, from, to);
    match king_square(&new_board, color) {
        None => false,
        Some(king) => is_attacked(&new_board, king, color.opposite()),
    }
}
