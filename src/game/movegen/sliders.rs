use crate::game::state::GameState;
use crate::game::types::{Color, Square};

impl GameState {
    /// Ray-cast along each direction, stopping at the first occupied
    /// square (inclusive if it holds an enemy piece).
    pub(in crate::game) fn ray_destinations(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut destinations = Vec::new();
        for &(delta_row, delta_col) in directions {
            let mut current = from;
            while let Some(to) = current.offset(delta_row, delta_col) {
                match self.board().piece_at(to) {
                    None => {
                        destinations.push(to);
                        current = to;
                    }
                    Some(occupant) => {
                        if occupant.color != color {
                            destinations.push(to);
                        }
                        break;
                    }
                }
            }
        }
        destinations
    }
}
