//! Attack detection.
//!
//! Pure over a `Board`: no game state is consulted, so legality simulation
//! can run it against scratch boards. Pawn attack patterns live here and
//! are deliberately separate from pawn move generation - a pawn attacks
//! its forward diagonals whether or not they are occupied.

use super::board::Board;
use super::movegen::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::types::{Color, PieceKind, Square};

impl Board {
    /// True if any piece of `attacker` attacks `target`.
    #[must_use]
    pub(crate) fn is_square_attacked(&self, target: Square, attacker: Color) -> bool {
        // Pawns: an attacking pawn sits one row behind the target (from the
        // attacker's point of view), one column to either side.
        let behind = -attacker.pawn_direction();
        for delta_col in [-1, 1] {
            if let Some(sq) = target.offset(behind, delta_col) {
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color == attacker && piece.kind == PieceKind::Pawn {
                        return true;
                    }
                }
            }
        }

        for &(delta_row, delta_col) in &KNIGHT_OFFSETS {
            if let Some(sq) = target.offset(delta_row, delta_col) {
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color == attacker && piece.kind == PieceKind::Knight {
                        return true;
                    }
                }
            }
        }

        for &(delta_row, delta_col) in &KING_OFFSETS {
            if let Some(sq) = target.offset(delta_row, delta_col) {
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color == attacker && piece.kind == PieceKind::King {
                        return true;
                    }
                }
            }
        }

        // Sliders: walk each ray to the first occupied square.
        if self.ray_hits(target, attacker, &ROOK_DIRECTIONS, PieceKind::attacks_straight) {
            return true;
        }
        if self.ray_hits(target, attacker, &BISHOP_DIRECTIONS, PieceKind::attacks_diagonally) {
            return true;
        }

        false
    }

    fn ray_hits(
        &self,
        target: Square,
        attacker: Color,
        directions: &[(isize, isize)],
        matches: fn(PieceKind) -> bool,
    ) -> bool {
        for &(delta_row, delta_col) in directions {
            let mut current = target;
            while let Some(sq) = current.offset(delta_row, delta_col) {
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color == attacker && matches(piece.kind) {
                        return true;
                    }
                    break;
                }
                current = sq;
            }
        }
        false
    }

    /// True if the king of `color` is attacked.
    #[must_use]
    pub(crate) fn king_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.find_king(color), color.opponent())
    }
}
