//! Mailbox board representation.
//!
//! The board is a flat 64-entry array of `Option<Piece>`, indexed
//! `row * 8 + col`. All simulation and execution work on clones of this
//! array, never in place on a caller-held board.

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Color, Piece, PieceKind, Square};

/// Canonical starting position, built once and cloned per new game.
static STARTING_BOARD: Lazy<Board> = Lazy::new(Board::build_starting_position);

/// A total mapping from square to optional piece.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    #[cfg_attr(feature = "serde", serde(with = "serde_squares"))]
    squares: [Option<Piece>; 64],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub(crate) const fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn starting_position() -> Board {
        STARTING_BOARD.clone()
    }

    fn build_starting_position() -> Board {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back_rank.iter().enumerate() {
            board.set(Square(0, col), Piece::new(kind, Color::White));
            board.set(Square(7, col), Piece::new(kind, Color::Black));
            board.set(Square(1, col), Piece::new(PieceKind::Pawn, Color::White));
            board.set(Square(6, col), Piece::new(PieceKind::Pawn, Color::Black));
        }
        board
    }

    /// The piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.as_index()]
    }

    /// True if the square is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_index()].is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.as_index()] = Some(piece);
    }

    /// Remove and return the piece on a square.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.as_index()].take()
    }

    /// Iterate over all occupied squares in stable row-major order.
    pub(crate) fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(|(idx, slot)| {
            slot.map(|piece| (Square(idx / 8, idx % 8), piece))
        })
    }

    /// Iterate over all squares holding a piece of the given color.
    pub(crate) fn occupied_by(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// Locate the king of a color.
    ///
    /// A board with no king of a color is unreachable through legal play;
    /// panics rather than returning an inconsistent answer.
    #[must_use]
    pub(crate) fn find_king(&self, color: Color) -> Square {
        self.occupied_by(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
            .unwrap_or_else(|| panic!("invariant violated: no {color} king on the board"))
    }

    /// Move a piece from one square to another, returning any captured
    /// piece. Used for both committed execution and legality simulation;
    /// special-move bookkeeping (en passant removal, rook relocation,
    /// promotion) stays with the caller.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.take(from);
        let captured = self.squares[to.as_index()];
        self.squares[to.as_index()] = piece;
        captured
    }
}

#[cfg(feature = "serde")]
mod serde_squares {
    //! Serde can't derive for [T; 64]; go through a Vec.

    use super::Piece;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        squares: &[Option<Piece>; 64],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        squares.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[Option<Piece>; 64], D::Error> {
        let vec: Vec<Option<Piece>> = Vec::deserialize(deserializer)?;
        vec.try_into()
            .map_err(|_| serde::de::Error::custom("board must have exactly 64 squares"))
    }
}
