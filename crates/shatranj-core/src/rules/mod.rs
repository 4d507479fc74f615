//! Per-piece pseudo-legal move rules.
//!
//! A move is pseudo-legal when the geometry of the step and the
//! occupancy of the squares it touches permit it, ignoring whether it
//! would leave the mover's own king attacked. Check safety is layered
//! on top by [`Board`](crate::board::Board), which also enforces the
//! friendly-fire and wrong-color rejections shared by every kind.

mod king;
mod knight;
mod pawn;
mod sliders;

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Return `true` if `piece`, standing on `from`, could reach `to`
/// under the movement rule of its kind.
///
/// Check detection calls this directly: it must never consult check
/// safety itself, or "is this move legal" and "does this leave me in
/// check" would recurse into each other.
pub(crate) fn is_pseudo_legal(piece: Piece, from: Coord, to: Coord, board: &Board) -> bool {
    match piece.kind() {
        PieceKind::Pawn => pawn::is_pseudo_legal(piece.color(), from, to, board),
        PieceKind::Knight => knight::is_pseudo_legal(from, to),
        PieceKind::Bishop => sliders::bishop(from, to, board),
        PieceKind::Rook => sliders::rook(from, to, board),
        PieceKind::Queen => sliders::queen(from, to, board),
        PieceKind::King => king::is_pseudo_legal(from, to),
    }
}
