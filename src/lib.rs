pub mod game;

pub use game::{
    AppliedMove, Board, CastleSide, CastlingRights, Color, DrawReason, FenError, GameState,
    GameStatus, MoveError, MoveRecord, Piece, PieceKind, PlayerId, PositionBuilder, Resignation,
    Square, SquareError,
};
