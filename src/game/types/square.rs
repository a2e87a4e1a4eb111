//! Board square type and algebraic conversions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game::error::SquareError;

/// A square on the board, as (row, column), each in 0..8.
///
/// Row 0 is White's back rank (rank 1), column 0 is the a-file. Off-board
/// coordinates are unrepresentable: construction is checked and returns
/// `None`/`Err` rather than clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Create a new square with bounds checking.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Row (0-7, where 0 = rank 1).
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Column (0-7, where 0 = file a).
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Flat index into a 64-entry board array (`row * 8 + col`).
    #[inline]
    #[must_use]
    pub(crate) const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// The square offset by (delta_row, delta_col), or `None` if off-board.
    #[must_use]
    pub(crate) fn offset(self, delta_row: isize, delta_col: isize) -> Option<Square> {
        let row = self.0 as isize + delta_row;
        let col = self.1 as isize + delta_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// True if this square is light-colored on a standard board.
    #[inline]
    #[must_use]
    pub(crate) const fn is_light(self) -> bool {
        (self.0 + self.1) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };
        let row = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert_eq!(Square::new(0, 0), Some(Square(0, 0)));
        assert_eq!(Square::new(7, 7), Some(Square(7, 7)));
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn test_algebraic_round_trip() {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                let parsed: Square = sq.to_string().parse().unwrap();
                assert_eq!(parsed, sq);
            }
        }
    }

    #[test]
    fn test_corners() {
        assert_eq!("a1".parse::<Square>().unwrap(), Square(0, 0));
        assert_eq!("h8".parse::<Square>().unwrap(), Square(7, 7));
        assert_eq!(Square(0, 0).to_string(), "a1");
        assert_eq!(Square(7, 7).to_string(), "h8");
    }

    #[test]
    fn test_invalid_notation() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a1b".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset() {
        assert_eq!(Square(0, 0).offset(1, 1), Some(Square(1, 1)));
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(7, 7).offset(0, 1), None);
    }
}
