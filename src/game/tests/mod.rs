//! Engine tests, organized by category:
//! - `movegen.rs` - move counts and generation determinism
//! - `special_moves.rs` - castling, en passant, promotion
//! - `draw.rs` - draw detection (50-move, repetition, insufficient material)
//! - `endings.rs` - checkmate, stalemate, rejection paths
//! - `notation.rs` - SAN output
//! - `proptest.rs` - property-based tests

mod movegen;

use crate::game::{GameState, PieceKind, Square};

/// A fresh game with the default test participants.
pub(crate) fn new_game() -> GameState {
    GameState::new("white".into(), "black".into())
}

/// Apply a move given in coordinate form ("e2", "e4"), playing for
/// whichever side is to move. Panics if the move is rejected.
pub(crate) fn play(state: &GameState, from: &str, to: &str) -> GameState {
    play_promoting(state, from, to, None)
}

pub(crate) fn play_promoting(
    state: &GameState,
    from: &str,
    to: &str,
    promotion: Option<PieceKind>,
) -> GameState {
    let player = state.player(state.side_to_move()).clone();
    let from: Square = from.parse().expect("bad from square");
    let to: Square = to.parse().expect("bad to square");
    state
        .apply_move(&player, from, to, promotion)
        .unwrap_or_else(|err| panic!("move {from} -> {to} rejected: {err}"))
        .state
}

/// Apply a sequence of coordinate moves, alternating sides.
pub(crate) fn play_all(state: &GameState, moves: &[(&str, &str)]) -> GameState {
    let mut current = state.clone();
    for (from, to) in moves {
        current = play(&current, from, to);
    }
    current
}
