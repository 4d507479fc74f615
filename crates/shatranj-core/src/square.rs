//! A single board square and its occupant.

use crate::coord::Coord;
use crate::piece::Piece;

/// One square of the board: a fixed coordinate plus an optional occupant.
///
/// All 64 squares are created when the board is constructed and live
/// for its whole lifetime; only the occupant ever changes, and only the
/// board itself changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    coord: Coord,
    occupant: Option<Piece>,
}

impl Square {
    /// Create an empty square at the given coordinate.
    #[inline]
    pub(crate) const fn new(coord: Coord) -> Square {
        Square {
            coord,
            occupant: None,
        }
    }

    /// Return this square's coordinate.
    #[inline]
    pub const fn coord(self) -> Coord {
        self.coord
    }

    /// Return the occupant, if any.
    #[inline]
    pub const fn occupant(self) -> Option<Piece> {
        self.occupant
    }

    /// Return `true` if no piece stands here.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.occupant.is_none()
    }

    /// Replace the occupant.
    #[inline]
    pub(crate) fn set_occupant(&mut self, occupant: Option<Piece>) {
        self.occupant = occupant;
    }
}
