use crate::game::state::GameState;
use crate::game::types::{Color, Square};

impl GameState {
    pub(in crate::game) fn pawn_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut destinations = Vec::new();
        let dir = color.pawn_direction();

        // Single push, then double push from the starting row.
        if let Some(forward) = from.offset(dir, 0) {
            if self.board().is_empty(forward) {
                destinations.push(forward);
                if from.row() == color.pawn_start_row() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.board().is_empty(double) {
                            destinations.push(double);
                        }
                    }
                }
            }
        }

        // Diagonal captures, including the en-passant target square.
        for delta_col in [-1, 1] {
            if let Some(target) = from.offset(dir, delta_col) {
                match self.board().piece_at(target) {
                    Some(occupant) if occupant.color != color => destinations.push(target),
                    None if Some(target) == self.en_passant_target() => {
                        destinations.push(target);
                    }
                    _ => {}
                }
            }
        }

        destinations
    }
}

#[cfg(test)]
mod tests {
    use crate::game::builder::PositionBuilder;
    use crate::game::types::{Color, PieceKind, Square};
    use crate::game::GameState;

    #[test]
    fn test_double_push_from_start() {
        let state = GameState::new("w".into(), "b".into());
        let moves = state.pseudo_legal_destinations(Square(1, 4));
        assert!(moves.contains(&Square(2, 4)));
        assert!(moves.contains(&Square(3, 4)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_double_push_blocked_by_intervening_piece() {
        let state = PositionBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(7, 4), Color::Black, PieceKind::King)
            .piece(Square(1, 0), Color::White, PieceKind::Pawn)
            .piece(Square(2, 0), Color::Black, PieceKind::Knight)
            .build();
        assert!(state.pseudo_legal_destinations(Square(1, 0)).is_empty());
    }

    #[test]
    fn test_no_forward_capture() {
        let state = PositionBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(7, 4), Color::Black, PieceKind::King)
            .piece(Square(3, 3), Color::White, PieceKind::Pawn)
            .piece(Square(4, 3), Color::Black, PieceKind::Pawn)
            .build();
        assert!(state.pseudo_legal_destinations(Square(3, 3)).is_empty());
    }

    #[test]
    fn test_diagonal_capture_only_enemy() {
        let state = PositionBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(7, 4), Color::Black, PieceKind::King)
            .piece(Square(3, 3), Color::White, PieceKind::Pawn)
            .piece(Square(4, 2), Color::Black, PieceKind::Knight)
            .piece(Square(4, 4), Color::White, PieceKind::Knight)
            .build();
        let moves = state.pseudo_legal_destinations(Square(3, 3));
        assert!(moves.contains(&Square(4, 2)));
        assert!(!moves.contains(&Square(4, 4)));
        assert!(moves.contains(&Square(4, 3)));
    }
}
