//! Played-move record types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// Which side of the board a castling move went to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// An accepted, executed move, as appended to the game history.
///
/// Records are created once by move execution and never mutated. `piece`
/// is the piece as it stood before the move (promotion replaces it on the
/// board but not here).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub castling: Option<CastleSide>,
    pub en_passant: bool,
    pub promotion: Option<PieceKind>,
    pub notation: String,
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl MoveRecord {
    /// True if the move captured a piece (including en passant).
    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
