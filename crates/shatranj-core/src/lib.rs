//! Core chess rules: board representation, per-piece move legality,
//! check and mate detection, and legal-move enumeration.
//!
//! The crate is a pure in-process state machine: no I/O, no blocking,
//! no outbound dependencies. Turn orchestration, rendering, timers,
//! and move-selection policies live in the collaborators that drive a
//! [`Board`].

mod board;
mod chess_move;
mod color;
mod coord;
mod error;
mod piece;
mod piece_kind;
mod rules;
mod square;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use coord::Coord;
pub use error::CoordError;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
