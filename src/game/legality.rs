//! Legality filtering over pseudo-legal destinations.
//!
//! A candidate is legal iff simulating it on a scratch board (including
//! en-passant pawn removal, but no other special-move bookkeeping) leaves
//! the mover's own king unattacked.

use super::state::GameState;
use super::types::{Color, PieceKind, Square};

impl GameState {
    /// Legal destinations for the piece on `square`.
    ///
    /// Empty if the square is empty, holds a piece with no legal moves, or
    /// the game is over. Order is stable for a given position.
    #[must_use]
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        if self.is_game_over() {
            return Vec::new();
        }
        let Some(piece) = self.board().piece_at(square) else {
            return Vec::new();
        };

        self.pseudo_legal_destinations(square)
            .into_iter()
            .filter(|&to| !self.exposes_own_king(square, to, piece.color))
            .collect()
    }

    /// All legal (from, to) pairs for a side, in board-scan order.
    #[must_use]
    pub fn all_legal_moves_for_side(&self, side: Color) -> Vec<(Square, Square)> {
        let mut moves = Vec::new();
        for (from, _) in self.board().occupied_by(side) {
            for to in self.legal_destinations(from) {
                moves.push((from, to));
            }
        }
        moves
    }

    /// True if `side`'s king is currently attacked.
    #[must_use]
    pub fn is_in_check(&self, side: Color) -> bool {
        self.board().king_in_check(side)
    }

    /// True if the side to move has any legal move at all.
    pub(crate) fn side_to_move_has_moves(&self) -> bool {
        for (from, piece) in self.board().occupied_by(self.side_to_move()) {
            for to in self.pseudo_legal_destinations(from) {
                if !self.exposes_own_king(from, to, piece.color) {
                    return true;
                }
            }
        }
        false
    }

    /// Simulate `from -> to` on a scratch board and test whether the
    /// mover's king ends up attacked.
    pub(crate) fn exposes_own_king(&self, from: Square, to: Square, mover: Color) -> bool {
        let mut scratch = self.board().clone();

        // En passant removes a pawn from a square other than `to`.
        if let Some(piece) = scratch.piece_at(from) {
            if piece.kind == PieceKind::Pawn
                && Some(to) == self.en_passant_target()
                && scratch.is_empty(to)
            {
                if let Some(captured_sq) = to.offset(-mover.pawn_direction(), 0) {
                    scratch.take(captured_sq);
                }
            }
        }

        scratch.relocate(from, to);
        scratch.king_in_check(mover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::builder::PositionBuilder;

    #[test]
    fn test_pinned_piece_cannot_move_off_line() {
        // Bishop on e2 is pinned by the rook on e8.
        let state = PositionBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(1, 4), Color::White, PieceKind::Bishop)
            .piece(Square(7, 4), Color::Black, PieceKind::Rook)
            .piece(Square(7, 0), Color::Black, PieceKind::King)
            .build();
        assert!(state.legal_destinations(Square(1, 4)).is_empty());
        assert!(!state.pseudo_legal_destinations(Square(1, 4)).is_empty());
    }

    #[test]
    fn test_pinned_slider_may_move_along_pin_line() {
        // A rook pinned along a file can still slide along it.
        let state = PositionBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(2, 4), Color::White, PieceKind::Rook)
            .piece(Square(7, 4), Color::Black, PieceKind::Rook)
            .piece(Square(7, 0), Color::Black, PieceKind::King)
            .build();
        let moves = state.legal_destinations(Square(2, 4));
        assert!(moves.contains(&Square(5, 4)));
        assert!(moves.contains(&Square(7, 4)));
        assert!(!moves.contains(&Square(2, 0)));
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let state = PositionBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(7, 3), Color::Black, PieceKind::Rook)
            .piece(Square(7, 0), Color::Black, PieceKind::King)
            .build();
        let moves = state.legal_destinations(Square(0, 4));
        assert!(!moves.contains(&Square(0, 3)));
        assert!(!moves.contains(&Square(1, 3)));
        assert!(moves.contains(&Square(0, 5)));
    }

    #[test]
    fn test_check_must_be_answered() {
        // Only blocking, capturing or moving the king is legal in check.
        let state = PositionBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(1, 0), Color::White, PieceKind::Rook)
            .piece(Square(4, 4), Color::Black, PieceKind::Rook)
            .piece(Square(7, 0), Color::Black, PieceKind::King)
            .build();
        // Rook a2 can interpose on e2 but not wander to b1.
        let rook_moves = state.legal_destinations(Square(1, 0));
        assert_eq!(rook_moves, vec![Square(1, 4)]);
    }

    #[test]
    fn test_en_passant_capture_may_not_expose_king() {
        // Capturing en passant removes two pawns from rank 5 at once,
        // opening the rook's line to the king; the capture is illegal.
        let state = PositionBuilder::new()
            .piece(Square(4, 0), Color::White, PieceKind::King)
            .piece(Square(4, 1), Color::White, PieceKind::Pawn)
            .piece(Square(4, 2), Color::Black, PieceKind::Pawn)
            .piece(Square(4, 7), Color::Black, PieceKind::Rook)
            .piece(Square(7, 7), Color::Black, PieceKind::King)
            .en_passant_target(Square(5, 2))
            .build();
        let pawn_moves = state.legal_destinations(Square(4, 1));
        assert!(state.pseudo_legal_destinations(Square(4, 1)).contains(&Square(5, 2)));
        assert!(!pawn_moves.contains(&Square(5, 2)));
    }

    #[test]
    fn test_empty_square_has_no_destinations() {
        let state = crate::game::GameState::new("w".into(), "b".into());
        assert!(state.legal_destinations(Square(4, 4)).is_empty());
    }

    #[test]
    fn test_twenty_legal_moves_from_start() {
        let state = crate::game::GameState::new("w".into(), "b".into());
        assert_eq!(state.all_legal_moves_for_side(Color::White).len(), 20);
        assert_eq!(state.all_legal_moves_for_side(Color::Black).len(), 20);
    }
}
