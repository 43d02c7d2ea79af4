//! Board coordinates and square notation.

use std::fmt;

/// A board position as a zero-based row/column pair.
///
/// Row 0 is rank 8 (black's back rank) and row 7 is rank 1 (white's back
/// rank); column 0 is file a. This matches the row order the board is
/// serialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Creates a coordinate from row and column indices (both 0-7).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Parses two-character square notation (e.g. "e4").
    ///
    /// Accepts exactly one lowercase file letter `a`-`h` followed by one
    /// rank digit `1`-`8`; anything else yields `None`.
    pub const fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Coord {
            row: b'8' - rank,
            col: file - b'a',
        })
    }

    /// Returns the square notation for this coordinate.
    pub fn notation(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{}{}", file, rank)
    }
}
