//! Chess move representation.

use std::fmt;

use crate::coord::Coord;

/// A move: an immutable (source, destination) coordinate pair.
///
/// Moves are plain values produced by legal-move enumeration or by an
/// input adapter. They carry no reference to board state and may be
/// handed to any board for validation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Coord,
    dest: Coord,
}

impl Move {
    /// Create a move from a source and a destination.
    #[inline]
    pub const fn new(source: Coord, dest: Coord) -> Move {
        Move { source, dest }
    }

    /// Return the source square.
    #[inline]
    pub const fn source(self) -> Coord {
        self.source
    }

    /// Return the destination square.
    #[inline]
    pub const fn dest(self) -> Coord {
        self.dest
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Move;
    use crate::coord::Coord;

    #[test]
    fn accessors() {
        let mv = Move::new(Coord::E2, Coord::E4);
        assert_eq!(mv.source(), Coord::E2);
        assert_eq!(mv.dest(), Coord::E4);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Move::new(Coord::E2, Coord::E4)), "e2e4");
        assert_eq!(format!("{}", Move::new(Coord::G8, Coord::F6)), "g8f6");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Move::new(Coord::D2, Coord::D4)), "Move(d2d4)");
    }

    #[test]
    fn equality_and_hash() {
        let mv1 = Move::new(Coord::E2, Coord::E4);
        let mv2 = Move::new(Coord::E2, Coord::E4);
        let mv3 = Move::new(Coord::D2, Coord::D4);

        assert_eq!(mv1, mv2);
        assert_ne!(mv1, mv3);

        let mut set = HashSet::new();
        set.insert(mv1);
        set.insert(mv2);
        assert_eq!(set.len(), 1);
        set.insert(mv3);
        assert_eq!(set.len(), 2);
    }
}
