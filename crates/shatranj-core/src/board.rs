//! The chess board: piece placement, move execution, and game-state queries.

use std::fmt;

use tracing::{debug, trace};

use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rules;
use crate::square::Square;

/// Piece kinds on the back rank, left to right from file a.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 playing field.
///
/// The board owns all 64 squares; pieces change squares only through
/// [`Board::try_move`] and the setup methods, so every completed
/// mutation leaves the position consistent. Rejected move attempts are
/// side-effect free: the board compares equal to its pre-call state.
///
/// The board is a single-threaded resource. Mutating operations take
/// `&mut self`, so exclusive access during a move is enforced at
/// compile time; callers that share a board across threads must
/// serialize access around it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; Coord::COUNT],
}

impl Board {
    /// Create a board with all 64 squares vacant.
    pub fn empty() -> Board {
        Board {
            squares: std::array::from_fn(|i| Square::new(Coord::from_index_unchecked(i as u8))),
        }
    }

    /// Create a board holding the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Restore the standard starting position in place.
    ///
    /// Black's pieces fill rows 0 and 1 (ranks 8 and 7), White's fill
    /// rows 6 and 7 (ranks 2 and 1).
    pub fn reset(&mut self) {
        self.clear();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            self.place(Coord::new_unchecked(col, 0), Piece::new(kind, Color::Black));
            self.place(Coord::new_unchecked(col, 7), Piece::new(kind, Color::White));
        }
        for col in 0..8 {
            self.place(Coord::new_unchecked(col, 1), Piece::BLACK_PAWN);
            self.place(Coord::new_unchecked(col, 6), Piece::WHITE_PAWN);
        }
        debug!("board reset to the starting position");
    }

    /// Remove every piece from the board.
    pub fn clear(&mut self) {
        for square in &mut self.squares {
            square.set_occupant(None);
        }
    }

    /// Put a piece on a square, replacing any previous occupant.
    ///
    /// Intended for custom setups; it performs no legality checks.
    pub fn place(&mut self, coord: Coord, piece: Piece) {
        self.squares[coord.index()].set_occupant(Some(piece));
    }

    /// Take the piece off a square, returning it if one was there.
    pub fn remove(&mut self, coord: Coord) -> Option<Piece> {
        let removed = self.squares[coord.index()].occupant();
        self.squares[coord.index()].set_occupant(None);
        removed
    }

    /// Return the square at the given coordinate.
    #[inline]
    pub fn square(&self, coord: Coord) -> &Square {
        &self.squares[coord.index()]
    }

    /// Return the piece on the given coordinate, if any.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.squares[coord.index()].occupant()
    }

    /// Return `true` if no occupant stands strictly between the two
    /// endpoints. The endpoints themselves are not inspected.
    ///
    /// Callers must pass endpoints that share a rank, a file, or an
    /// exact diagonal; the walk advances one unit step at a time along
    /// the sign of each delta.
    pub fn path_is_clear(&self, from: Coord, to: Coord) -> bool {
        let dcol = (to.col() as i8 - from.col() as i8).signum();
        let drow = (to.row() as i8 - from.row() as i8).signum();
        debug_assert!(
            from.col() == to.col()
                || from.row() == to.row()
                || (to.col() as i8 - from.col() as i8).abs()
                    == (to.row() as i8 - from.row() as i8).abs(),
            "path walk requires a straight or diagonal vector"
        );

        let mut cursor = from;
        while let Some(next) = cursor.offset(dcol, drow) {
            if next == to {
                return true;
            }
            if !self.square(next).is_empty() {
                return false;
            }
            cursor = next;
        }
        true
    }

    /// Attempt a move for the given color. Returns `true` and mutates
    /// the board only when the move is fully legal.
    ///
    /// Rejections, in order: null move, empty origin, wrong-color
    /// mover, friendly piece on the destination, the piece's movement
    /// rule, and finally a move that would leave the mover's own king
    /// in check. Every rejection returns `false` with the board
    /// untouched, so callers may simply pick another move.
    pub fn try_move(&mut self, from: Coord, to: Coord, mover: Color) -> bool {
        if from == to {
            return false;
        }
        let piece = match self.piece_at(from) {
            Some(piece) => piece,
            None => {
                trace!(%from, %to, "move rejected: empty origin");
                return false;
            }
        };
        if piece.color() != mover {
            trace!(%from, %to, %mover, "move rejected: piece belongs to the opponent");
            return false;
        }
        if let Some(target) = self.piece_at(to) {
            if target.color() == mover {
                trace!(%from, %to, "move rejected: friendly piece on destination");
                return false;
            }
        }
        if !rules::is_pseudo_legal(piece, from, to, self) {
            trace!(%from, %to, kind = %piece.kind(), "move rejected: movement rule");
            return false;
        }
        if self.exposes_king(from, to, mover) {
            trace!(%from, %to, %mover, "move rejected: leaves own king in check");
            return false;
        }

        self.squares[to.index()].set_occupant(Some(piece));
        self.squares[from.index()].set_occupant(None);
        debug!(%from, %to, %mover, "move committed");
        true
    }

    /// Attempt a move, inferring the mover's color from the piece on
    /// the origin square. Returns `false` when the origin is empty.
    pub fn try_move_from(&mut self, from: Coord, to: Coord) -> bool {
        match self.piece_at(from) {
            Some(piece) => self.try_move(from, to, piece.color()),
            None => false,
        }
    }

    /// Attempt a [`Move`] value, typically one produced by
    /// [`Board::legal_moves`].
    pub fn apply(&mut self, mv: Move) -> bool {
        self.try_move_from(mv.source(), mv.dest())
    }

    /// Tentatively play `from` → `to`, test whether `mover`'s king is
    /// attacked, and restore both squares exactly before returning.
    ///
    /// Only the two touched squares are snapshotted; nothing else
    /// changes, so the rollback is total.
    fn exposes_king(&mut self, from: Coord, to: Coord, mover: Color) -> bool {
        let piece = self.squares[from.index()].occupant();
        let captured = self.squares[to.index()].occupant();

        self.squares[to.index()].set_occupant(piece);
        self.squares[from.index()].set_occupant(None);
        let exposed = self.in_check(mover);
        self.squares[from.index()].set_occupant(piece);
        self.squares[to.index()].set_occupant(captured);

        exposed
    }

    /// Return `true` if the given color's king is attacked.
    ///
    /// A board with no king of that color reports `false`; scenario
    /// setups without both kings are still answerable. Detection scans
    /// every opposing piece's movement rule against the king's square
    /// and deliberately never consults check safety itself.
    pub fn in_check(&self, color: Color) -> bool {
        let Some(king) = self.find_king(color) else {
            return false;
        };
        Coord::all().any(|from| match self.piece_at(from) {
            Some(attacker) if attacker.color() == color.opponent() => {
                rules::is_pseudo_legal(attacker, from, king, self)
            }
            _ => false,
        })
    }

    /// Enumerate every legal move for the given color.
    ///
    /// Candidates are scanned in ascending (origin row, origin column,
    /// destination row, destination column) order, so the result is
    /// deterministic for a given position. The list is recomputed on
    /// every call; it is never cached.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        // Candidate simulations run on a private copy so this query can
        // take `&self` while reusing the same two-square rollback as
        // `try_move`.
        let mut scratch = self.clone();
        for from in Coord::all() {
            let piece = match self.piece_at(from) {
                Some(piece) if piece.color() == color => piece,
                _ => continue,
            };
            for to in Coord::all() {
                if from == to {
                    continue;
                }
                if let Some(target) = self.piece_at(to) {
                    if target.color() == color {
                        continue;
                    }
                }
                if !rules::is_pseudo_legal(piece, from, to, self) {
                    continue;
                }
                if scratch.exposes_king(from, to, color) {
                    continue;
                }
                moves.push(Move::new(from, to));
            }
        }
        moves
    }

    /// Return `true` if the given color is checkmated: in check with no
    /// legal moves.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Return `true` if the given color is stalemated: not in check but
    /// without any legal move.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Return the square holding the king of the given color, if present.
    fn find_king(&self, color: Color) -> Option<Coord> {
        let king = Piece::new(PieceKind::King, color);
        Coord::all().find(|&coord| self.piece_at(coord) == Some(king))
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board:\n{}", self.pretty())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = match self.0.piece_at(Coord::new_unchecked(col, row)) {
                    Some(piece) => piece.letter(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
