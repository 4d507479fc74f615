//! The six kinds of chess piece.

use std::fmt;

/// The kind of a piece, independent of which side owns it.
///
/// The set is closed: movement dispatch matches on it exhaustively, so
/// a new kind cannot be added without writing its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Every kind, pawn through king.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the lowercase letter used in board diagrams. The knight
    /// takes 'n', leaving 'k' for the king.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::PieceKind;

    #[test]
    fn knight_and_king_letters_do_not_collide() {
        assert_eq!(PieceKind::Knight.letter(), 'n');
        assert_eq!(PieceKind::King.letter(), 'k');
    }

    #[test]
    fn letters_are_distinct() {
        let letters: HashSet<char> = PieceKind::ALL.iter().map(|kind| kind.letter()).collect();
        assert_eq!(letters.len(), PieceKind::ALL.len());
    }

    #[test]
    fn all_covers_each_kind_once() {
        assert_eq!(PieceKind::ALL.len(), 6);
        let kinds: HashSet<PieceKind> = PieceKind::ALL.into_iter().collect();
        assert_eq!(kinds.len(), 6);
    }

    #[test]
    fn display_matches_letter() {
        for kind in PieceKind::ALL {
            assert_eq!(format!("{kind}"), kind.letter().to_string());
        }
    }
}
