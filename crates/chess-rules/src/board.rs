//! The 8x8 board and its canonical starting arrangement.

use crate::{Color, Coord, Piece, PieceKind};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// An 8x8 grid of cells, each either empty or holding one piece.
///
/// Row 0 is black's back rank, row 7 is white's. The only public
/// constructor is [`Board::standard`], so every board in existence is the
/// canonical setup or derived from it through [`GameSession`] moves.
///
/// [`GameSession`]: crate::GameSession
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board in the canonical chess starting arrangement.
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut cells: [[Option<Piece>; 8]; 8] = Default::default();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            cells[0][col] = Some(Piece::new(kind, Color::Black));
            cells[7][col] = Some(Piece::new(kind, Color::White));
        }
        for col in 0..8 {
            cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
        }
        Board { cells }
    }

    /// Returns the piece at the given coordinate, if any.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// Returns true if the given cell is empty.
    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_none()
    }

    /// Replaces the contents of a cell. Reserved for the game session.
    #[inline]
    pub(crate) fn set(&mut self, coord: Coord, cell: Option<Piece>) {
        self.cells[coord.row as usize][coord.col as usize] = cell;
    }

    /// Iterates over rows, row 0 (rank 8) first.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>; 8]> {
        self.cells.iter()
    }
}

// Wire format: an 8x8 array of cells, row 0 (rank 8) first, each cell
// null or {"type": ..., "color": ...}.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(8))?;
        for row in &self.cells {
            seq.serialize_element(&row[..])?;
        }
        seq.end()
    }
}
