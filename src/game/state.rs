//! Game state aggregate.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::outcome::GameStatus;
use super::types::{CastlingRights, Color, MoveRecord, Square};

/// Opaque identifier for a participant. The engine only ever compares
/// them; it attaches no meaning beyond which side an id plays.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        PlayerId(id)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId(id.to_string())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complete snapshot of a game.
///
/// Treated as an immutable value: every accepted move produces a fresh
/// state and leaves the input untouched, so the caller can serialize
/// concurrent submissions against the same prior state and commit exactly
/// one winner. Once the status is terminal the state never changes again;
/// further submissions are rejected with `GameAlreadyOver`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) players: [PlayerId; 2],
    pub(crate) move_history: Vec<MoveRecord>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) position_history: Vec<String>,
    pub(crate) in_check: bool,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// A new game from the standard starting position, White to move.
    #[must_use]
    pub fn new(white: PlayerId, black: PlayerId) -> GameState {
        let mut state = GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            players: [white, black],
            move_history: Vec::new(),
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            position_history: Vec::new(),
            in_check: false,
            status: GameStatus::InProgress,
        };
        let key = state.position_key();
        state.position_history.push(key);
        state
    }

    /// The current board.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Which side moves next.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The participant playing a side.
    #[inline]
    #[must_use]
    pub fn player(&self, side: Color) -> &PlayerId {
        &self.players[side.index()]
    }

    /// Which side a participant plays, or `None` for strangers.
    #[must_use]
    pub fn side_of(&self, player: &PlayerId) -> Option<Color> {
        Color::BOTH
            .into_iter()
            .find(|&side| self.player(side) == player)
    }

    /// Every accepted move so far, oldest first.
    #[inline]
    #[must_use]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    /// Current castling rights.
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn may capture into via en passant, valid for exactly
    /// the next move.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Plies since the last pawn move or capture.
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Full move counter, incremented after Black's move.
    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Classification of the current position.
    #[inline]
    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// True once the game has reached a terminal state.
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winning side, if the game ended decisively.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    /// The winning participant, if the game ended decisively.
    #[must_use]
    pub fn winner_id(&self) -> Option<&PlayerId> {
        self.winner().map(|side| self.player(side))
    }

    /// True if the side to move is currently in check.
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// How many times the current position has occurred, for the
    /// threefold-repetition rule.
    #[must_use]
    pub(crate) fn repetition_count(&self) -> usize {
        let current = self.position_key();
        self.position_history
            .iter()
            .filter(|key| **key == current)
            .count()
    }
}
