//! Move validation and execution.
//!
//! `apply_move` is the engine's main entry point: it validates a submitted
//! move against the full error taxonomy, executes it on a clone of the
//! state (the input state is never touched), classifies the resulting
//! position, and annotates the move record with its notation.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::error::MoveError;
use super::outcome::GameStatus;
use super::state::{GameState, PlayerId};
use super::types::{CastleSide, Color, MoveRecord, Piece, PieceKind, Square};

/// Everything a caller needs after an accepted move: the successor state,
/// the annotated move record, and the resulting classification.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AppliedMove {
    pub state: GameState,
    pub record: MoveRecord,
    pub outcome: GameStatus,
}

impl GameState {
    /// Validate and apply one move, returning the successor state.
    ///
    /// Validation order is fixed: finished game, unknown participant,
    /// wrong turn, empty origin, opponent's piece, illegal destination,
    /// then promotion checks. Every rejection is deterministic for the
    /// same input.
    pub fn apply_move(
        &self,
        player: &PlayerId,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<AppliedMove, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let side = self.side_of(player).ok_or(MoveError::NotAParticipant)?;
        if side != self.side_to_move {
            return Err(MoveError::NotYourTurn);
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSquare { square: from })?;
        if piece.color != side {
            return Err(MoveError::WrongPieceOwner { square: from });
        }
        if !self.legal_destinations(from).contains(&to) {
            #[cfg(feature = "logging")]
            log::debug!("rejected illegal move {from} -> {to} for {side}");
            return Err(MoveError::IllegalMove { from, to });
        }

        // Promotion kind must be supplied (and promotable) before anything
        // is executed. A stray promotion argument on a non-promoting move
        // is ignored.
        let promoting = piece.kind == PieceKind::Pawn && to.row() == side.pawn_promotion_row();
        let promotion = if promoting {
            match promotion {
                None => return Err(MoveError::PromotionPieceRequired),
                Some(kind) if kind.is_promotable() => Some(kind),
                Some(kind) => return Err(MoveError::InvalidPromotionKind { kind }),
            }
        } else {
            None
        };

        let mut next = self.clone();
        let (captured, castling, en_passant) = next.execute(side, piece, from, to, promotion);

        let outcome = next.evaluate_status();
        next.status = outcome;

        let mut record = MoveRecord {
            from,
            to,
            piece,
            captured,
            castling,
            en_passant,
            promotion,
            notation: String::new(),
            is_check: next.in_check,
            is_checkmate: matches!(outcome, GameStatus::Checkmate { .. }),
        };
        record.notation = self.san_for(&record);
        next.move_history.push(record.clone());

        #[cfg(feature = "logging")]
        {
            log::debug!("{side} played {}", record.notation);
            if outcome.is_terminal() {
                log::info!("game over: {}", outcome.reason());
            }
        }

        Ok(AppliedMove {
            state: next,
            record,
            outcome,
        })
    }

    /// Apply an already-validated move, including all special-move
    /// bookkeeping. Returns (captured piece, castle side, en passant).
    fn execute(
        &mut self,
        side: Color,
        piece: Piece,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> (Option<Piece>, Option<CastleSide>, bool) {
        // En passant: the captured pawn sits behind the destination square.
        let mut captured = None;
        let mut en_passant = false;
        if piece.kind == PieceKind::Pawn
            && Some(to) == self.en_passant_target
            && self.board.is_empty(to)
        {
            if let Some(behind) = to.offset(-side.pawn_direction(), 0) {
                captured = self.board.take(behind);
                en_passant = true;
            }
        }

        if let Some(direct) = self.board.relocate(from, to) {
            captured = Some(direct);
        }

        // The moved piece is now on `to`: mark it and apply any promotion.
        if let Some(mut moved) = self.board.piece_at(to) {
            moved.has_moved = true;
            if let Some(kind) = promotion {
                moved.kind = kind;
            }
            self.board.set(to, moved);
        }

        // Castling: a king moving two columns drags its rook along.
        let mut castling = None;
        if piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
            let back = side.back_rank();
            let (rook_from, rook_to, castle_side) = if to.col() > from.col() {
                (Square(back, 7), Square(back, 5), CastleSide::Kingside)
            } else {
                (Square(back, 0), Square(back, 3), CastleSide::Queenside)
            };
            self.board.relocate(rook_from, rook_to);
            if let Some(mut rook) = self.board.piece_at(rook_to) {
                rook.has_moved = true;
                self.board.set(rook_to, rook);
            }
            castling = Some(castle_side);
        }

        // Rights maintenance keys on absolute home squares: moving off
        // one, or capturing onto one, clears the corresponding right.
        self.clear_rights_touching(from);
        self.clear_rights_touching(to);

        // En-passant target is valid for exactly one reply.
        self.en_passant_target = if piece.kind == PieceKind::Pawn
            && from.row().abs_diff(to.row()) == 2
        {
            from.offset(side.pawn_direction(), 0)
        } else {
            None
        };

        if piece.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if side == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = side.opponent();
        self.in_check = self.board.king_in_check(self.side_to_move);
        let key = self.position_key();
        self.position_history.push(key);

        (captured, castling, en_passant)
    }

    fn clear_rights_touching(&mut self, sq: Square) {
        match (sq.row(), sq.col()) {
            (0, 4) => self.castling_rights.clear_color(Color::White),
            (7, 4) => self.castling_rights.clear_color(Color::Black),
            (0, 0) => self.castling_rights.clear(Color::White, false),
            (0, 7) => self.castling_rights.clear(Color::White, true),
            (7, 0) => self.castling_rights.clear(Color::Black, false),
            (7, 7) => self.castling_rights.clear(Color::Black, true),
            _ => {}
        }
    }
}
