use super::KNIGHT_OFFSETS;
use crate::game::state::GameState;
use crate::game::types::{Color, Square};

impl GameState {
    pub(in crate::game) fn knight_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        self.offset_destinations(from, color, &KNIGHT_OFFSETS)
    }
}
