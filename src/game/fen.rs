//! FEN import/export and the canonical position key.
//!
//! The position key is a reduced FEN fingerprint (board, side to move,
//! castling rights, en-passant square) used solely for threefold-repetition
//! counting; move counters are intentionally excluded.

use super::board::Board;
use super::error::FenError;
use super::outcome::GameStatus;
use super::state::{GameState, PlayerId};
use super::types::{CastlingRights, Color, Piece, PieceKind, Square};

impl GameState {
    /// Canonical fingerprint of the current position.
    #[must_use]
    pub(crate) fn position_key(&self) -> String {
        let mut key = String::with_capacity(80);
        write_placement(&mut key, &self.board);
        key.push(' ');
        key.push(if self.side_to_move == Color::White {
            'w'
        } else {
            'b'
        });
        key.push(' ');
        write_castling(&mut key, self.castling_rights);
        key.push(' ');
        match self.en_passant_target {
            Some(sq) => key.push_str(&sq.to_string()),
            None => key.push('-'),
        }
        key
    }

    /// Full FEN for the current position.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.position_key(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Build a game from a FEN position.
    ///
    /// Accepts 4 to 6 fields; missing counters default to 0 and 1. Pieces
    /// found away from their conventional home squares are marked as
    /// having moved.
    pub fn from_fen(fen: &str, white: PlayerId, black: PlayerId) -> Result<GameState, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() > 8 {
            return Err(FenError::TooManyRanks { ranks: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = 7 - rank_idx;
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else {
                    let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: col + 1,
                        });
                    }
                    let sq = Square(row, col);
                    let mut piece = Piece::new(kind, color);
                    piece.has_moved = !is_home_square(kind, color, sq);
                    board.set(sq, piece);
                    col += 1;
                }
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling_rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling_rights.grant(Color::White, true),
                'Q' => castling_rights.grant(Color::White, false),
                'k' => castling_rights.grant(Color::Black, true),
                'q' => castling_rights.grant(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        let halfmove_clock = parts
            .get(4)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        let fullmove_number = parts
            .get(5)
            .and_then(|s| s.parse().ok())
            .unwrap_or(1);

        let mut state = GameState {
            board,
            side_to_move,
            players: [white, black],
            move_history: Vec::new(),
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            position_history: Vec::new(),
            in_check: false,
            status: GameStatus::InProgress,
        };
        state.in_check = state.board.king_in_check(side_to_move);
        let key = state.position_key();
        state.position_history.push(key);
        state.status = state.evaluate_status();
        Ok(state)
    }
}

fn write_placement(out: &mut String, board: &Board) {
    for row in (0..8).rev() {
        let mut empty_run = 0;
        for col in 0..8 {
            match board.piece_at(Square(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from_digit(empty_run, 10).unwrap_or('0'));
                        empty_run = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from_digit(empty_run, 10).unwrap_or('0'));
        }
        if row > 0 {
            out.push('/');
        }
    }
}

fn write_castling(out: &mut String, rights: CastlingRights) {
    let mut any = false;
    for (color, kingside, c) in [
        (Color::White, true, 'K'),
        (Color::White, false, 'Q'),
        (Color::Black, true, 'k'),
        (Color::Black, false, 'q'),
    ] {
        if rights.has(color, kingside) {
            out.push(c);
            any = true;
        }
    }
    if !any {
        out.push('-');
    }
}

/// Conventional home square check for `has_moved` inference on FEN import.
fn is_home_square(kind: PieceKind, color: Color, sq: Square) -> bool {
    let back = color.back_rank();
    match kind {
        PieceKind::Pawn => sq.row() == color.pawn_start_row(),
        PieceKind::King => sq == Square(back, 4),
        PieceKind::Queen => sq == Square(back, 3),
        PieceKind::Rook => sq == Square(back, 0) || sq == Square(back, 7),
        PieceKind::Knight => sq == Square(back, 1) || sq == Square(back, 6),
        PieceKind::Bishop => sq == Square(back, 2) || sq == Square(back, 5),
    }
}
