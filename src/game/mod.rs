//! Chess rules engine.
//!
//! A pure, deterministic state transformer over immutable `GameState`
//! values: the caller presents a state and a requested move, and gets back
//! a new state, an annotated move record and a game-end classification, or
//! a precise rejection. Full legal-move semantics are covered: piece
//! movement, check/checkmate/stalemate, castling, en passant, promotion,
//! and the insufficient-material, fifty-move and threefold-repetition
//! draws. No search, no clocks, no I/O.
//!
//! # Example
//! ```
//! use chess_rules::{GameState, Square};
//!
//! let game = GameState::new("alice".into(), "bob".into());
//! let applied = game
//!     .apply_move(&"alice".into(), Square(1, 4), Square(3, 4), None)
//!     .unwrap();
//! assert_eq!(applied.record.notation, "e4");
//! ```

mod attacks;
mod board;
mod builder;
mod error;
mod execute;
mod fen;
mod legality;
mod movegen;
mod notation;
mod outcome;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use execute::AppliedMove;
pub use outcome::{DrawReason, GameStatus, Resignation};
pub use state::{GameState, PlayerId};
pub use types::{CastleSide, CastlingRights, Color, MoveRecord, Piece, PieceKind, Square};
