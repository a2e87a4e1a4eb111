//! Core rules-engine types.
//!
//! - `PieceKind`, `Color`, `Piece` - pieces and sides
//! - `Square` - checked (row, col) board coordinate
//! - `CastlingRights` - monotonically decreasing rights bitmask
//! - `MoveRecord`, `CastleSide` - immutable played-move records

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{CastleSide, MoveRecord};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
