//! Fluent builder for constructing positions.
//!
//! Mostly a test convenience: set up a position piece by piece instead of
//! writing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::{Color, PieceKind, PositionBuilder, Square};
//!
//! let state = PositionBuilder::new()
//!     .piece(Square(0, 4), Color::White, PieceKind::King)
//!     .piece(Square(7, 4), Color::Black, PieceKind::King)
//!     .piece(Square(1, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(!state.is_game_over());
//! ```

use super::board::Board;
use super::outcome::GameStatus;
use super::state::{GameState, PlayerId};
use super::types::{CastlingRights, Color, Piece, PieceKind, Square};

/// A fluent builder for `GameState` positions.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, PieceKind)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    players: (PlayerId, PlayerId),
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// An empty position, White to move, all castling rights set.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            players: ("white".into(), "black".into()),
        }
    }

    /// Place a piece.
    #[must_use]
    pub fn piece(mut self, sq: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.push((sq, color, kind));
        self
    }

    /// Set which side moves first.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Remove all castling rights.
    #[must_use]
    pub fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en-passant target square.
    #[must_use]
    pub fn en_passant_target(mut self, sq: Square) -> Self {
        self.en_passant_target = Some(sq);
        self
    }

    /// Set the half-move clock.
    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the participant ids.
    #[must_use]
    pub fn players(mut self, white: PlayerId, black: PlayerId) -> Self {
        self.players = (white, black);
        self
    }

    /// Build the `GameState`, classifying the position as a side effect.
    #[must_use]
    pub fn build(self) -> GameState {
        let mut board = Board::empty();
        for (sq, color, kind) in self.pieces {
            board.set(sq, Piece::new(kind, color));
        }

        let (white, black) = self.players;
        let mut state = GameState {
            board,
            side_to_move: self.side_to_move,
            players: [white, black],
            move_history: Vec::new(),
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: 1,
            position_history: Vec::new(),
            in_check: false,
            status: GameStatus::InProgress,
        };
        state.in_check = state.board.king_in_check(state.side_to_move);
        let key = state.position_key();
        state.position_history.push(key);
        state.status = state.evaluate_status();
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_places_pieces() {
        let state = PositionBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(7, 4), Color::Black, PieceKind::King)
            .piece(Square(3, 3), Color::White, PieceKind::Queen)
            .side_to_move(Color::Black)
            .build();
        assert_eq!(state.side_to_move(), Color::Black);
        assert_eq!(
            state.board().piece_at(Square(3, 3)).map(|p| p.kind),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn test_builder_classifies_position() {
        // Two bare kings are immediately a material draw.
        let state = PositionBuilder::new()
            .piece(Square(0, 0), Color::White, PieceKind::King)
            .piece(Square(7, 7), Color::Black, PieceKind::King)
            .build();
        assert!(state.is_game_over());
    }
}
