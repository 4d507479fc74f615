//! Board coordinates: a validated (column, row) pair on the 8x8 grid.

use std::fmt;

use crate::error::CoordError;

/// A coordinate on the chess board.
///
/// Columns run left to right (column 0 = file a). Rows run top to
/// bottom from Black's side: row 0 is Black's back rank (rank 8) and
/// row 7 is White's back rank (rank 1).
///
/// A `Coord` can only be built through validating constructors, so any
/// value of this type addresses a real square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    col: u8,
    row: u8,
}

impl Coord {
    /// Total number of board squares.
    pub const COUNT: usize = 64;

    /// Create a coordinate, failing when either component is outside [0, 8).
    #[inline]
    pub const fn new(col: u8, row: u8) -> Result<Coord, CoordError> {
        if col < 8 && row < 8 {
            Ok(Coord { col, row })
        } else {
            Err(CoordError::OutOfBoard { col, row })
        }
    }

    /// Create a coordinate without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both components are below 8.
    #[inline]
    pub(crate) const fn new_unchecked(col: u8, row: u8) -> Coord {
        debug_assert!(col < 8 && row < 8);
        Coord { col, row }
    }

    /// Create a coordinate from a row-major index, returning `None` if
    /// out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Coord> {
        if index < 64 {
            Some(Coord {
                col: index % 8,
                row: index / 8,
            })
        } else {
            None
        }
    }

    /// Create a coordinate from a row-major index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Coord {
        debug_assert!(index < 64);
        Coord {
            col: index % 8,
            row: index / 8,
        }
    }

    /// Return the column (0..7, column 0 = file a).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the row (0..7, row 0 = rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Return the row-major index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Return the coordinate displaced by the given deltas, or `None`
    /// when the step leaves the board.
    #[inline]
    pub const fn offset(self, dcol: i8, drow: i8) -> Option<Coord> {
        let col = self.col as i16 + dcol as i16;
        let row = self.row as i16 + drow as i16;
        if col >= 0 && col < 8 && row >= 0 && row < 8 {
            Some(Coord {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over all 64 coordinates in ascending (row, column) order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0u8..64).map(Coord::from_index_unchecked)
    }

    // Named square constants in algebraic terms (rank 1 = row 7).
    pub const A1: Coord = Coord { col: 0, row: 7 };
    pub const B1: Coord = Coord { col: 1, row: 7 };
    pub const C1: Coord = Coord { col: 2, row: 7 };
    pub const D1: Coord = Coord { col: 3, row: 7 };
    pub const E1: Coord = Coord { col: 4, row: 7 };
    pub const F1: Coord = Coord { col: 5, row: 7 };
    pub const G1: Coord = Coord { col: 6, row: 7 };
    pub const H1: Coord = Coord { col: 7, row: 7 };
    pub const A2: Coord = Coord { col: 0, row: 6 };
    pub const B2: Coord = Coord { col: 1, row: 6 };
    pub const C2: Coord = Coord { col: 2, row: 6 };
    pub const D2: Coord = Coord { col: 3, row: 6 };
    pub const E2: Coord = Coord { col: 4, row: 6 };
    pub const F2: Coord = Coord { col: 5, row: 6 };
    pub const G2: Coord = Coord { col: 6, row: 6 };
    pub const H2: Coord = Coord { col: 7, row: 6 };
    pub const A3: Coord = Coord { col: 0, row: 5 };
    pub const B3: Coord = Coord { col: 1, row: 5 };
    pub const C3: Coord = Coord { col: 2, row: 5 };
    pub const D3: Coord = Coord { col: 3, row: 5 };
    pub const E3: Coord = Coord { col: 4, row: 5 };
    pub const F3: Coord = Coord { col: 5, row: 5 };
    pub const G3: Coord = Coord { col: 6, row: 5 };
    pub const H3: Coord = Coord { col: 7, row: 5 };
    pub const A4: Coord = Coord { col: 0, row: 4 };
    pub const B4: Coord = Coord { col: 1, row: 4 };
    pub const C4: Coord = Coord { col: 2, row: 4 };
    pub const D4: Coord = Coord { col: 3, row: 4 };
    pub const E4: Coord = Coord { col: 4, row: 4 };
    pub const F4: Coord = Coord { col: 5, row: 4 };
    pub const G4: Coord = Coord { col: 6, row: 4 };
    pub const H4: Coord = Coord { col: 7, row: 4 };
    pub const A5: Coord = Coord { col: 0, row: 3 };
    pub const B5: Coord = Coord { col: 1, row: 3 };
    pub const C5: Coord = Coord { col: 2, row: 3 };
    pub const D5: Coord = Coord { col: 3, row: 3 };
    pub const E5: Coord = Coord { col: 4, row: 3 };
    pub const F5: Coord = Coord { col: 5, row: 3 };
    pub const G5: Coord = Coord { col: 6, row: 3 };
    pub const H5: Coord = Coord { col: 7, row: 3 };
    pub const A6: Coord = Coord { col: 0, row: 2 };
    pub const B6: Coord = Coord { col: 1, row: 2 };
    pub const C6: Coord = Coord { col: 2, row: 2 };
    pub const D6: Coord = Coord { col: 3, row: 2 };
    pub const E6: Coord = Coord { col: 4, row: 2 };
    pub const F6: Coord = Coord { col: 5, row: 2 };
    pub const G6: Coord = Coord { col: 6, row: 2 };
    pub const H6: Coord = Coord { col: 7, row: 2 };
    pub const A7: Coord = Coord { col: 0, row: 1 };
    pub const B7: Coord = Coord { col: 1, row: 1 };
    pub const C7: Coord = Coord { col: 2, row: 1 };
    pub const D7: Coord = Coord { col: 3, row: 1 };
    pub const E7: Coord = Coord { col: 4, row: 1 };
    pub const F7: Coord = Coord { col: 5, row: 1 };
    pub const G7: Coord = Coord { col: 6, row: 1 };
    pub const H7: Coord = Coord { col: 7, row: 1 };
    pub const A8: Coord = Coord { col: 0, row: 0 };
    pub const B8: Coord = Coord { col: 1, row: 0 };
    pub const C8: Coord = Coord { col: 2, row: 0 };
    pub const D8: Coord = Coord { col: 3, row: 0 };
    pub const E8: Coord = Coord { col: 4, row: 0 };
    pub const F8: Coord = Coord { col: 5, row: 0 };
    pub const G8: Coord = Coord { col: 6, row: 0 };
    pub const H8: Coord = Coord { col: 7, row: 0 };
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self)
    }
}
