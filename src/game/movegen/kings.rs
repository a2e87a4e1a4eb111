use super::KING_OFFSETS;
use crate::game::state::GameState;
use crate::game::types::{Color, PieceKind, Square};

impl GameState {
    pub(in crate::game) fn king_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut destinations = self.offset_destinations(from, color, &KING_OFFSETS);

        // Synthetic two-square castling destinations. The legality filter
        // re-checks the destination square; the transit square and the
        // current check status have to be checked here because simulating
        // the final position alone would miss them.
        let back = color.back_rank();
        if from == Square(back, 4) && !self.board().king_in_check(color) {
            if self.can_castle(color, true) {
                destinations.push(Square(back, 6));
            }
            if self.can_castle(color, false) {
                destinations.push(Square(back, 2));
            }
        }

        destinations
    }

    fn can_castle(&self, color: Color, kingside: bool) -> bool {
        if !self.castling_rights().has(color, kingside) {
            return false;
        }

        let back = color.back_rank();
        let (rook_col, between_cols, transit): (usize, &[usize], Square) = if kingside {
            (7, &[5, 6], Square(back, 5))
        } else {
            (0, &[1, 2, 3], Square(back, 3))
        };

        for &col in between_cols {
            if !self.board().is_empty(Square(back, col)) {
                return false;
            }
        }

        let rook_home = Square(back, rook_col);
        match self.board().piece_at(rook_home) {
            Some(rook) if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved => {}
            _ => return false,
        }

        // King may not pass through an attacked square.
        !self.board().is_square_attacked(transit, color.opponent())
    }
}
