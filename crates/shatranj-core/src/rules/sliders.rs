//! Sliding piece rules: bishop, rook, and queen.
//!
//! All three share the board's strict-path walk: the squares strictly
//! between the endpoints must be empty. The endpoints themselves are
//! the board's concern.

use crate::board::Board;
use crate::coord::Coord;

/// Bishop rule: an exact diagonal with a clear strict path.
pub(super) fn bishop(from: Coord, to: Coord, board: &Board) -> bool {
    if from == to {
        return false;
    }
    let dcol = (from.col() as i16 - to.col() as i16).abs();
    let drow = (from.row() as i16 - to.row() as i16).abs();
    if dcol != drow {
        return false;
    }

    board.path_is_clear(from, to)
}

/// Rook rule: a straight line along one rank or one file with a clear
/// strict path.
pub(super) fn rook(from: Coord, to: Coord, board: &Board) -> bool {
    if from == to {
        return false;
    }
    if from.col() != to.col() && from.row() != to.row() {
        return false;
    }

    board.path_is_clear(from, to)
}

/// Queen rule: rook-shape or bishop-shape with a clear strict path.
pub(super) fn queen(from: Coord, to: Coord, board: &Board) -> bool {
    if from == to {
        return false;
    }
    let dcol = (from.col() as i16 - to.col() as i16).abs();
    let drow = (from.row() as i16 - to.row() as i16).abs();
    let straight = from.col() == to.col() || from.row() == to.row();
    let diagonal = dcol == drow;
    if !(straight || diagonal) {
        return false;
    }

    board.path_is_clear(from, to)
}
