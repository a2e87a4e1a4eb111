//! Standard Algebraic Notation for played moves.
//!
//! Produces notation like "e4", "Nf3", "Bxc6+", "exd6", "O-O", "e8=Q#".
//! Disambiguation is minimal: file first, then rank, then both, chosen by
//! testing which omission still uniquely identifies the mover among
//! same-kind, same-color pieces that could legally reach the destination.

use super::state::GameState;
use super::types::{CastleSide, MoveRecord, PieceKind};

impl GameState {
    /// Format a just-validated move in SAN.
    ///
    /// `self` is the position the move was played from; the record's
    /// check/checkmate flags describe the resulting position.
    pub(crate) fn san_for(&self, record: &MoveRecord) -> String {
        let mut san = String::new();

        if let Some(castle) = record.castling {
            san.push_str(match castle {
                CastleSide::Kingside => "O-O",
                CastleSide::Queenside => "O-O-O",
            });
        } else {
            let kind = record.piece.kind;

            if kind == PieceKind::Pawn {
                // Pawn captures carry the origin file.
                if record.is_capture() {
                    san.push((b'a' + record.from.col() as u8) as char);
                }
            } else {
                san.push(kind.to_char().to_ascii_uppercase());
                let (needs_file, needs_rank) = self.disambiguation(record);
                if needs_file {
                    san.push((b'a' + record.from.col() as u8) as char);
                }
                if needs_rank {
                    san.push((b'1' + record.from.row() as u8) as char);
                }
            }

            if record.is_capture() {
                san.push('x');
            }

            san.push_str(&record.to.to_string());

            if let Some(promo) = record.promotion {
                san.push('=');
                san.push(promo.to_char().to_ascii_uppercase());
            }
        }

        if record.is_checkmate {
            san.push('#');
        } else if record.is_check {
            san.push('+');
        }

        san
    }

    /// Which of (file, rank) must be written to single out the mover among
    /// other same-kind pieces of the same color that can legally reach the
    /// same destination.
    fn disambiguation(&self, record: &MoveRecord) -> (bool, bool) {
        let rivals: Vec<_> = self
            .board()
            .occupied_by(record.piece.color)
            .filter(|&(sq, piece)| sq != record.from && piece.kind == record.piece.kind)
            .filter(|&(sq, _)| self.legal_destinations(sq).contains(&record.to))
            .map(|(sq, _)| sq)
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let shares_file = rivals.iter().any(|sq| sq.col() == record.from.col());
        let shares_rank = rivals.iter().any(|sq| sq.row() == record.from.row());

        match (shares_file, shares_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }
}
