//! Error types for the rules engine.

use std::fmt;

use super::types::{PieceKind, Square};

/// Rejection reasons for a submitted move.
///
/// The taxonomy is closed and total: every rejection path maps to exactly
/// one variant, so callers can surface precise feedback. Rejections are
/// deterministic for a given input and are never retried internally.
/// `GameAlreadyOver` and `NotAParticipant` are terminal for the session;
/// the rest are recoverable with corrected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already reached a terminal state
    GameAlreadyOver,
    /// The submitting player is not one of the two participants
    NotAParticipant,
    /// It is the other side's turn
    NotYourTurn,
    /// The origin square is empty
    NoPieceAtSquare { square: Square },
    /// The piece on the origin square belongs to the opponent
    WrongPieceOwner { square: Square },
    /// The destination is not a legal destination for that piece
    IllegalMove { from: Square, to: Square },
    /// A pawn is promoting but no promotion kind was supplied
    PromotionPieceRequired,
    /// The supplied promotion kind is not promotable (king or pawn)
    InvalidPromotionKind { kind: PieceKind },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameAlreadyOver => write!(f, "Game is already over"),
            MoveError::NotAParticipant => write!(f, "Player is not a participant in this game"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::NoPieceAtSquare { square } => {
                write!(f, "No piece on square {square}")
            }
            MoveError::WrongPieceOwner { square } => {
                write!(f, "Piece on {square} belongs to the opponent")
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from} to {to}")
            }
            MoveError::PromotionPieceRequired => {
                write!(f, "Promotion piece required for pawn reaching the last rank")
            }
            MoveError::InvalidPromotionKind { kind } => {
                write!(f, "Cannot promote to {kind:?}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Too many ranks in the position string
    TooManyRanks { ranks: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::TooManyRanks { ranks } => {
                write!(f, "Too many ranks ({ranks}) in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::NoPieceAtSquare {
            square: Square(3, 4),
        };
        assert!(err.to_string().contains("e4"));

        let err = MoveError::IllegalMove {
            from: Square(1, 4),
            to: Square(4, 4),
        };
        assert!(err.to_string().contains("e2"));
        assert!(err.to_string().contains("e5"));
    }

    #[test]
    fn test_move_error_equality() {
        assert_eq!(MoveError::NotYourTurn, MoveError::NotYourTurn);
        assert_ne!(MoveError::NotYourTurn, MoveError::GameAlreadyOver);
    }

    #[test]
    fn test_invalid_promotion_kind_display() {
        let err = MoveError::InvalidPromotionKind {
            kind: PieceKind::King,
        };
        assert!(err.to_string().contains("King"));
    }

    #[test]
    fn test_square_error_display() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn test_fen_error_display() {
        let err = FenError::TooFewParts { found: 2 };
        assert!(err.to_string().contains('2'));
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::PromotionPieceRequired;
        assert_eq!(err.clone(), err);
    }
}
