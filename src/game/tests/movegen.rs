//! Move generation counts and determinism.

use super::{new_game, play};
use crate::game::{Color, Square};

#[test]
fn test_twenty_moves_in_start_position() {
    let state = new_game();
    let moves = state.all_legal_moves_for_side(Color::White);
    assert_eq!(moves.len(), 20, "16 pawn moves + 4 knight moves");
}

#[test]
fn test_four_hundred_positions_after_one_move_each() {
    let state = new_game();
    let mut count = 0;
    for (from, to) in state.all_legal_moves_for_side(Color::White) {
        let next = state
            .apply_move(&"white".into(), from, to, None)
            .unwrap()
            .state;
        count += next.all_legal_moves_for_side(Color::Black).len();
    }
    assert_eq!(count, 400);
}

#[test]
fn test_knight_moves_from_start() {
    let state = new_game();
    let moves = state.legal_destinations(Square(0, 1));
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&Square(2, 0)));
    assert!(moves.contains(&Square(2, 2)));
}

#[test]
fn test_no_moves_for_boxed_in_pieces() {
    let state = new_game();
    assert!(state.legal_destinations(Square(0, 4)).is_empty()); // king
    assert!(state.legal_destinations(Square(0, 3)).is_empty()); // queen
    assert!(state.legal_destinations(Square(0, 0)).is_empty()); // rook
    assert!(state.legal_destinations(Square(0, 2)).is_empty()); // bishop
}

#[test]
fn test_generation_order_is_stable() {
    let state = play(&new_game(), "e2", "e4");
    for (from, _) in state.all_legal_moves_for_side(Color::Black) {
        assert_eq!(
            state.legal_destinations(from),
            state.legal_destinations(from)
        );
    }
    assert_eq!(
        state.all_legal_moves_for_side(Color::Black),
        state.all_legal_moves_for_side(Color::Black)
    );
}

#[test]
fn test_opponent_pieces_also_enumerable() {
    // legal_destinations highlights any side's piece, not just the mover's.
    let state = new_game();
    assert_eq!(state.legal_destinations(Square(6, 4)).len(), 2);
}
