//! Game-end classification.
//!
//! A small state machine over {in progress, checkmate, stalemate,
//! draw(reason), resigned}; every state except in-progress is terminal.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::state::{GameState, PlayerId};
use super::types::{Color, PieceKind};

/// Why a drawn game is a draw.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

impl DrawReason {
    /// Stable machine-readable reason string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DrawReason::InsufficientMaterial => "insufficient_material",
            DrawReason::FiftyMoveRule => "fifty_move",
            DrawReason::ThreefoldRepetition => "threefold_repetition",
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
    Resigned { winner: Color },
}

impl GameStatus {
    /// True for every state except `InProgress`.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning side, if the game ended decisively.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::Resigned { winner } => Some(winner),
            _ => None,
        }
    }

    /// True for stalemate and all rule-based draws.
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, GameStatus::Stalemate | GameStatus::Draw(_))
    }

    /// Stable machine-readable reason string.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Checkmate { .. } => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw(reason) => reason.as_str(),
            GameStatus::Resigned { .. } => "resignation",
        }
    }
}

/// Result of a forfeit: the non-resigning side wins.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Resignation {
    pub winner: Color,
    pub winner_id: PlayerId,
    pub reason: &'static str,
}

impl GameState {
    /// Classify the position for the side to move.
    ///
    /// Evaluated in fixed priority order: checkmate, stalemate,
    /// insufficient material, fifty-move rule, threefold repetition.
    pub(crate) fn evaluate_status(&self) -> GameStatus {
        if !self.side_to_move_has_moves() {
            return if self.board.king_in_check(self.side_to_move) {
                GameStatus::Checkmate {
                    winner: self.side_to_move.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }

        if self.has_insufficient_material() {
            return GameStatus::Draw(DrawReason::InsufficientMaterial);
        }

        // 50 full moves by each side.
        if self.halfmove_clock >= 100 {
            return GameStatus::Draw(DrawReason::FiftyMoveRule);
        }

        if self.repetition_count() >= 3 {
            return GameStatus::Draw(DrawReason::ThreefoldRepetition);
        }

        GameStatus::InProgress
    }

    /// Neither side can force checkmate.
    ///
    /// Deliberately only covers total piece counts of 2-4: bare kings,
    /// king + single minor vs. king, and king + bishop vs. king + bishop
    /// with both bishops on the same square color. Rarer theoretical
    /// draws (e.g. two knights vs. king) are not classified here.
    fn has_insufficient_material(&self) -> bool {
        let mut non_kings = Vec::new();
        for (sq, piece) in self.board.occupied() {
            match piece.kind {
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::King => {}
                PieceKind::Bishop | PieceKind::Knight => non_kings.push((sq, piece)),
            }
            if non_kings.len() > 2 {
                return false;
            }
        }

        match non_kings.as_slice() {
            [] => true,
            [_] => true,
            [(sq_a, a), (sq_b, b)] => {
                a.kind == PieceKind::Bishop
                    && b.kind == PieceKind::Bishop
                    && sq_a.is_light() == sq_b.is_light()
            }
            _ => false,
        }
    }

    /// Resign the game on behalf of `player`, awarding the other side.
    ///
    /// Independent of the board position; used when a participant
    /// concedes or disconnects. Still rejects submissions for finished
    /// games and from non-participants.
    pub fn forfeit(&self, player: &PlayerId) -> Result<(GameState, Resignation), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let resigning = self.side_of(player).ok_or(MoveError::NotAParticipant)?;
        let winner = resigning.opponent();

        let mut next = self.clone();
        next.status = GameStatus::Resigned { winner };

        #[cfg(feature = "logging")]
        log::info!("game resigned by {resigning}, {winner} wins");

        let resignation = Resignation {
            winner,
            winner_id: next.player(winner).clone(),
            reason: "resignation",
        };
        Ok((next, resignation))
    }
}
