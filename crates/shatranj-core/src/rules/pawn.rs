//! Pawn movement rule.

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;

/// Row a pawn of the given color starts on.
const fn start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Forward row delta: White advances toward row 0, Black toward row 7.
const fn advance_dir(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Pawn rule: single advance onto an empty square, double advance from
/// the start row through two empty squares, or a one-step diagonal
/// capture of an opposing piece. No en passant, no promotion.
///
/// Double-advance eligibility is keyed off the pawn's current row
/// matching its color's start row, not off a "has moved" flag. A pawn
/// placed back on its start row by an external setup is eligible
/// again; a deliberate simplification, pinned by tests.
pub(super) fn is_pseudo_legal(color: Color, from: Coord, to: Coord, board: &Board) -> bool {
    let dir = advance_dir(color) as i16;
    let dcol = to.col() as i16 - from.col() as i16;
    let drow = to.row() as i16 - from.row() as i16;

    // Single advance onto an empty square.
    if dcol == 0 && drow == dir && board.piece_at(to).is_none() {
        return true;
    }

    // Double advance from the start row; the crossed square and the
    // destination must both be empty.
    if dcol == 0 && drow == 2 * dir && from.row() == start_row(color) {
        let crossed = match from.offset(0, advance_dir(color)) {
            Some(coord) => coord,
            None => return false,
        };
        if board.piece_at(crossed).is_none() && board.piece_at(to).is_none() {
            return true;
        }
    }

    // Diagonal capture of an opposing piece.
    if dcol.abs() == 1 && drow == dir {
        if let Some(target) = board.piece_at(to) {
            return target.color() == color.opponent();
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::is_pseudo_legal;
    use crate::board::Board;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::piece::Piece;

    #[test]
    fn single_advance_to_empty_square() {
        let mut board = Board::empty();
        board.place(Coord::E2, Piece::WHITE_PAWN);
        board.place(Coord::D7, Piece::BLACK_PAWN);

        assert!(is_pseudo_legal(Color::White, Coord::E2, Coord::E3, &board));
        assert!(is_pseudo_legal(Color::Black, Coord::D7, Coord::D6, &board));
    }

    #[test]
    fn single_advance_blocked() {
        let mut board = Board::empty();
        board.place(Coord::E2, Piece::WHITE_PAWN);
        board.place(Coord::E3, Piece::BLACK_ROOK);

        assert!(!is_pseudo_legal(Color::White, Coord::E2, Coord::E3, &board));
    }

    #[test]
    fn no_backward_or_sideways_moves() {
        let mut board = Board::empty();
        board.place(Coord::E4, Piece::WHITE_PAWN);

        assert!(!is_pseudo_legal(Color::White, Coord::E4, Coord::E3, &board));
        assert!(!is_pseudo_legal(Color::White, Coord::E4, Coord::D4, &board));
        assert!(!is_pseudo_legal(Color::White, Coord::E4, Coord::F4, &board));
        assert!(!is_pseudo_legal(Color::White, Coord::E4, Coord::E6, &board));
    }

    #[test]
    fn double_advance_from_start_row() {
        let mut board = Board::empty();
        board.place(Coord::E2, Piece::WHITE_PAWN);
        board.place(Coord::B7, Piece::BLACK_PAWN);

        assert!(is_pseudo_legal(Color::White, Coord::E2, Coord::E4, &board));
        assert!(is_pseudo_legal(Color::Black, Coord::B7, Coord::B5, &board));
    }

    #[test]
    fn double_advance_requires_both_squares_empty() {
        let mut board = Board::empty();
        board.place(Coord::E2, Piece::WHITE_PAWN);
        board.place(Coord::E3, Piece::BLACK_KNIGHT);
        assert!(!is_pseudo_legal(Color::White, Coord::E2, Coord::E4, &board));

        let mut board = Board::empty();
        board.place(Coord::E2, Piece::WHITE_PAWN);
        board.place(Coord::E4, Piece::BLACK_KNIGHT);
        assert!(!is_pseudo_legal(Color::White, Coord::E2, Coord::E4, &board));
    }

    #[test]
    fn double_advance_only_from_start_row() {
        let mut board = Board::empty();
        board.place(Coord::E3, Piece::WHITE_PAWN);

        assert!(!is_pseudo_legal(Color::White, Coord::E3, Coord::E5, &board));
    }

    #[test]
    fn eligibility_is_row_derived() {
        // A pawn standing on its start row is always double-step
        // eligible, even if it got there by external placement:
        // eligibility comes from the current row, not move history.
        let mut board = Board::empty();
        board.place(Coord::C2, Piece::WHITE_PAWN);
        assert!(is_pseudo_legal(Color::White, Coord::C2, Coord::C4, &board));
    }

    #[test]
    fn diagonal_capture_of_opponent() {
        let mut board = Board::empty();
        board.place(Coord::E4, Piece::WHITE_PAWN);
        board.place(Coord::D5, Piece::BLACK_PAWN);
        board.place(Coord::F5, Piece::BLACK_BISHOP);

        assert!(is_pseudo_legal(Color::White, Coord::E4, Coord::D5, &board));
        assert!(is_pseudo_legal(Color::White, Coord::E4, Coord::F5, &board));
    }

    #[test]
    fn diagonal_requires_an_opposing_occupant() {
        let mut board = Board::empty();
        board.place(Coord::E4, Piece::WHITE_PAWN);
        board.place(Coord::F5, Piece::WHITE_KNIGHT);

        // Empty diagonal: no quiet diagonal steps.
        assert!(!is_pseudo_legal(Color::White, Coord::E4, Coord::D5, &board));
        // Friendly occupant: not a capture.
        assert!(!is_pseudo_legal(Color::White, Coord::E4, Coord::F5, &board));
    }

    #[test]
    fn no_straight_captures() {
        let mut board = Board::empty();
        board.place(Coord::E4, Piece::WHITE_PAWN);
        board.place(Coord::E5, Piece::BLACK_PAWN);

        assert!(!is_pseudo_legal(Color::White, Coord::E4, Coord::E5, &board));
    }

    #[test]
    fn black_mirrors_white() {
        let mut board = Board::empty();
        board.place(Coord::D5, Piece::BLACK_PAWN);
        board.place(Coord::C4, Piece::WHITE_PAWN);

        assert!(is_pseudo_legal(Color::Black, Coord::D5, Coord::D4, &board));
        assert!(is_pseudo_legal(Color::Black, Coord::D5, Coord::C4, &board));
        assert!(!is_pseudo_legal(Color::Black, Coord::D5, Coord::D6, &board));
        assert!(!is_pseudo_legal(Color::Black, Coord::D5, Coord::D3, &board));
    }
}
