//! Pseudo-legal move generation.
//!
//! Each generator enumerates the destinations a piece could move to given
//! only movement rules and board occupancy; whether a move exposes the
//! mover's own king is the legality filter's problem. Generation order is
//! fixed (offset tables and ray directions are scanned in declaration
//! order) so results are reproducible.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::state::GameState;
use super::types::{Color, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl GameState {
    /// Every pseudo-legal destination for the piece on `from`.
    ///
    /// Empty if the square is empty. Includes synthetic two-square castling
    /// destinations for an eligible king.
    pub(crate) fn pseudo_legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.board().piece_at(from) else {
            return Vec::new();
        };

        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(from, piece.color),
            PieceKind::Knight => self.knight_destinations(from, piece.color),
            PieceKind::Bishop => self.ray_destinations(from, piece.color, &BISHOP_DIRECTIONS),
            PieceKind::Rook => self.ray_destinations(from, piece.color, &ROOK_DIRECTIONS),
            PieceKind::Queen => self.ray_destinations(from, piece.color, &QUEEN_DIRECTIONS),
            PieceKind::King => self.king_destinations(from, piece.color),
        }
    }

    /// Destinations from a fixed offset table, filtered by bounds and
    /// same-color occupancy. Shared by knight and king generation.
    pub(in crate::game) fn offset_destinations(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut destinations = Vec::new();
        for &(delta_row, delta_col) in offsets {
            if let Some(to) = from.offset(delta_row, delta_col) {
                match self.board().piece_at(to) {
                    Some(occupant) if occupant.color == color => {}
                    _ => destinations.push(to),
                }
            }
        }
        destinations
    }
}
