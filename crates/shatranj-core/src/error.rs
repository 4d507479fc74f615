//! Error types for coordinate validation.

/// Errors from validating a board coordinate.
///
/// Illegal moves are not errors: move attempts report rejection through
/// an ordinary `false` return. The only fatal-to-the-call condition in
/// this crate is addressing a square that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    /// A (column, row) pair falls outside the 8x8 board.
    #[error("coordinates outside the board: ({col}, {row})")]
    OutOfBoard {
        /// The rejected column.
        col: u8,
        /// The rejected row.
        row: u8,
    },
}
