//! Knight movement rule.

use crate::coord::Coord;

/// Knight rule: an L-shaped jump of (2, 1) or (1, 2). Occupancy of the
/// crossed squares is irrelevant, and the destination occupant's color
/// is the board's concern, not this rule's.
pub(super) fn is_pseudo_legal(from: Coord, to: Coord) -> bool {
    let dcol = (from.col() as i16 - to.col() as i16).abs();
    let drow = (from.row() as i16 - to.row() as i16).abs();

    (dcol == 2 && drow == 1) || (dcol == 1 && drow == 2)
}
