//! King movement rule.

use crate::coord::Coord;

/// King rule: one step in any direction (Chebyshev distance 1). The
/// null step is excluded. No castling.
pub(super) fn is_pseudo_legal(from: Coord, to: Coord) -> bool {
    let dcol = (from.col() as i16 - to.col() as i16).abs();
    let drow = (from.row() as i16 - to.row() as i16).abs();

    dcol <= 1 && drow <= 1 && !(dcol == 0 && drow == 0)
}

#[cfg(test)]
mod tests {
    use super::is_pseudo_legal;
    use crate::coord::Coord;

    #[test]
    fn all_eight_neighbors() {
        let targets = [
            Coord::D5, Coord::E5, Coord::F5,
            Coord::D4, Coord::F4,
            Coord::D3, Coord::E3, Coord::F3,
        ];
        for to in targets {
            assert!(is_pseudo_legal(Coord::E4, to), "expected e4 king to reach {to}");
        }
    }

    #[test]
    fn rejects_null_step() {
        assert!(!is_pseudo_legal(Coord::E4, Coord::E4));
    }

    #[test]
    fn rejects_longer_steps() {
        assert!(!is_pseudo_legal(Coord::E4, Coord::E6));
        assert!(!is_pseudo_legal(Coord::E4, Coord::G4));
        assert!(!is_pseudo_legal(Coord::E4, Coord::G6));
        assert!(!is_pseudo_legal(Coord::E1, Coord::G1));
    }
}
