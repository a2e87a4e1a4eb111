//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const WHITE_KINGSIDE: u8 = 1 << 0;
const WHITE_QUEENSIDE: u8 = 1 << 1;
const BLACK_KINGSIDE: u8 = 1 << 2;
const BLACK_QUEENSIDE: u8 = 1 << 3;

const ALL_RIGHTS: u8 = WHITE_KINGSIDE | WHITE_QUEENSIDE | BLACK_KINGSIDE | BLACK_QUEENSIDE;

/// The four castling rights as a bitmask.
///
/// Rights only ever decrease over the life of a game: there is no public
/// way to re-set a cleared right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights.
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All four rights (the starting position).
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_RIGHTS)
    }

    /// Check a specific right.
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Clear a specific right.
    #[inline]
    pub(crate) fn clear(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Clear both rights for a color (the king moved).
    #[inline]
    pub(crate) fn clear_color(&mut self, color: Color) {
        self.clear(color, true);
        self.clear(color, false);
    }

    /// Grant a right during position construction (FEN parse, builder).
    #[inline]
    pub(crate) fn grant(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => WHITE_KINGSIDE,
            (Color::White, false) => WHITE_QUEENSIDE,
            (Color::Black, true) => BLACK_KINGSIDE,
            (Color::Black, false) => BLACK_QUEENSIDE,
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_none() {
        let all = CastlingRights::all();
        let none = CastlingRights::none();
        for color in Color::BOTH {
            for kingside in [true, false] {
                assert!(all.has(color, kingside));
                assert!(!none.has(color, kingside));
            }
        }
    }

    #[test]
    fn test_clear_is_independent() {
        let mut rights = CastlingRights::all();
        rights.clear(Color::White, true);
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));
        assert!(rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_clear_color() {
        let mut rights = CastlingRights::all();
        rights.clear_color(Color::Black);
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
        assert!(rights.has(Color::White, true));
    }
}
