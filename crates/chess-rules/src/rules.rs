//! Per-piece move legality.
//!
//! `is_legal` is a pure predicate over a board snapshot: it checks the
//! moving piece's movement geometry and path clearance only. Turn order is
//! enforced by the session, and there is no check detection — games end by
//! actually capturing the king.

use crate::{Board, Color, Coord, Piece, PieceKind};

/// Returns true if moving `piece` from `from` to `to` is legal on `board`.
///
/// A destination occupied by a piece of the mover's own color is always
/// illegal; beyond that, legality is dispatched on the piece kind.
pub fn is_legal(board: &Board, from: Coord, to: Coord, piece: Piece) -> bool {
    if let Some(target) = board.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move(board, from, to, piece.color),
        PieceKind::Rook => rook_move(board, from, to),
        PieceKind::Knight => knight_move(from, to),
        PieceKind::Bishop => bishop_move(board, from, to),
        PieceKind::Queen => rook_move(board, from, to) || bishop_move(board, from, to),
        PieceKind::King => king_move(from, to),
    }
}

fn pawn_move(board: &Board, from: Coord, to: Coord, color: Color) -> bool {
    let dir = color.pawn_direction();
    let one_forward = from.row as i8 + dir;

    // Single step forward onto an empty cell.
    if to.row as i8 == one_forward && to.col == from.col && board.is_empty(to) {
        return true;
    }

    // Double step from the starting rank; both cells must be empty.
    if from.row == color.pawn_start_row()
        && to.row as i8 == from.row as i8 + 2 * dir
        && to.col == from.col
        && board.is_empty(to)
        && board.is_empty(Coord {
            row: one_forward as u8,
            col: from.col,
        })
    {
        return true;
    }

    // Diagonal step only as a capture.
    if to.row as i8 == one_forward && (to.col as i8 - from.col as i8).abs() == 1 {
        if let Some(target) = board.piece_at(to) {
            return target.color != color;
        }
    }

    false
}

fn rook_move(board: &Board, from: Coord, to: Coord) -> bool {
    if from.row != to.row && from.col != to.col {
        return false;
    }
    path_clear(board, from, to)
}

fn knight_move(from: Coord, to: Coord) -> bool {
    let row_diff = (to.row as i8 - from.row as i8).abs();
    let col_diff = (to.col as i8 - from.col as i8).abs();
    (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
}

fn bishop_move(board: &Board, from: Coord, to: Coord) -> bool {
    let row_diff = (to.row as i8 - from.row as i8).abs();
    let col_diff = (to.col as i8 - from.col as i8).abs();
    if row_diff != col_diff || row_diff == 0 {
        return false;
    }
    path_clear(board, from, to)
}

fn king_move(from: Coord, to: Coord) -> bool {
    let row_diff = (to.row as i8 - from.row as i8).abs();
    let col_diff = (to.col as i8 - from.col as i8).abs();
    row_diff <= 1 && col_diff <= 1 && (row_diff, col_diff) != (0, 0)
}

/// Walks from `from` toward `to` one cell at a time along the unit
/// direction vector. Every cell strictly between the endpoints must be
/// empty; the destination itself is judged by the capture rule, not here.
///
/// Callers guarantee the endpoints lie on a shared row, column, or
/// diagonal.
fn path_clear(board: &Board, from: Coord, to: Coord) -> bool {
    let row_step = (to.row as i8 - from.row as i8).signum();
    let col_step = (to.col as i8 - from.col as i8).signum();

    let mut row = from.row as i8 + row_step;
    let mut col = from.col as i8 + col_step;
    while (row, col) != (to.row as i8, to.col as i8) {
        let cell = Coord {
            row: row as u8,
            col: col as u8,
        };
        if !board.is_empty(cell) {
            return false;
        }
        row += row_step;
        col += col_step;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board() -> Board {
        let mut board = Board::standard();
        for row in 0..8 {
            for col in 0..8 {
                board.set(Coord { row, col }, None);
            }
        }
        board
    }

    fn place(board: &mut Board, notation: &str, kind: PieceKind, color: Color) {
        board.set(
            Coord::parse(notation).unwrap(),
            Some(Piece::new(kind, color)),
        );
    }

    fn legal(board: &Board, from: &str, to: &str) -> bool {
        let from = Coord::parse(from).unwrap();
        let to = Coord::parse(to).unwrap();
        let piece = board.piece_at(from).expect("no piece on origin square");
        is_legal(board, from, to, piece)
    }

    #[test]
    fn own_piece_capture_rejected() {
        let board = Board::standard();
        // White rook a1 onto white pawn a2.
        assert!(!legal(&board, "a1", "a2"));
        // A piece can never move onto its own square.
        assert!(!legal(&board, "a1", "a1"));
    }

    #[test]
    fn pawn_single_and_double_step() {
        let board = Board::standard();
        assert!(legal(&board, "e2", "e3"));
        assert!(legal(&board, "e2", "e4"));
        assert!(legal(&board, "e7", "e5"));
        // Triple step and backward step are out.
        assert!(!legal(&board, "e2", "e5"));
        let mut board = empty_board();
        place(&mut board, "e4", PieceKind::Pawn, Color::White);
        assert!(!legal(&board, "e4", "e3"));
        // Double step only from the home rank.
        assert!(!legal(&board, "e4", "e6"));
    }

    #[test]
    fn pawn_double_step_blocked() {
        // Blocker on the intermediate square.
        let mut board = Board::standard();
        place(&mut board, "e3", PieceKind::Knight, Color::Black);
        assert!(!legal(&board, "e2", "e4"));
        assert!(!legal(&board, "e2", "e3"));
        // Blocker on the destination square only.
        let mut board = Board::standard();
        place(&mut board, "e4", PieceKind::Knight, Color::Black);
        assert!(!legal(&board, "e2", "e4"));
        assert!(legal(&board, "e2", "e3"));
    }

    #[test]
    fn pawn_captures_diagonally_only() {
        let mut board = empty_board();
        place(&mut board, "e4", PieceKind::Pawn, Color::White);
        place(&mut board, "d5", PieceKind::Pawn, Color::Black);
        place(&mut board, "e5", PieceKind::Pawn, Color::Black);
        // Diagonal capture works, straight-ahead capture does not.
        assert!(legal(&board, "e4", "d5"));
        assert!(!legal(&board, "e4", "e5"));
        // Diagonal onto an empty cell is not a move.
        assert!(!legal(&board, "e4", "f5"));
    }

    #[test]
    fn rook_straight_lines_and_blocks() {
        let mut board = empty_board();
        place(&mut board, "d4", PieceKind::Rook, Color::White);
        assert!(legal(&board, "d4", "d8"));
        assert!(legal(&board, "d4", "a4"));
        assert!(!legal(&board, "d4", "e5"));
        place(&mut board, "d6", PieceKind::Pawn, Color::Black);
        assert!(!legal(&board, "d4", "d8"));
        // Capturing the blocker itself is fine.
        assert!(legal(&board, "d4", "d6"));
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let board = Board::standard();
        assert!(legal(&board, "g1", "f3"));
        assert!(legal(&board, "b8", "c6"));
        assert!(!legal(&board, "g1", "g3"));
        let mut board = empty_board();
        place(&mut board, "d4", PieceKind::Knight, Color::White);
        assert!(legal(&board, "d4", "e6"));
        assert!(legal(&board, "d4", "f5"));
        assert!(!legal(&board, "d4", "d6"));
        assert!(!legal(&board, "d4", "f6"));
    }

    #[test]
    fn bishop_diagonals_and_blocks() {
        let mut board = empty_board();
        place(&mut board, "c1", PieceKind::Bishop, Color::White);
        assert!(legal(&board, "c1", "h6"));
        assert!(legal(&board, "c1", "a3"));
        assert!(!legal(&board, "c1", "c4"));
        place(&mut board, "e3", PieceKind::Pawn, Color::White);
        assert!(!legal(&board, "c1", "h6"));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let mut board = empty_board();
        place(&mut board, "d4", PieceKind::Queen, Color::White);
        assert!(legal(&board, "d4", "d7"));
        assert!(legal(&board, "d4", "g7"));
        assert!(legal(&board, "d4", "a4"));
        assert!(!legal(&board, "d4", "e6"));
        place(&mut board, "f6", PieceKind::Pawn, Color::Black);
        assert!(!legal(&board, "d4", "g7"));
        assert!(legal(&board, "d4", "f6"));
    }

    #[test]
    fn king_single_step() {
        let mut board = empty_board();
        place(&mut board, "e4", PieceKind::King, Color::White);
        for to in ["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"] {
            assert!(legal(&board, "e4", to), "king e4 -> {} should be legal", to);
        }
        assert!(!legal(&board, "e4", "e6"));
        assert!(!legal(&board, "e4", "g4"));
    }

    #[test]
    fn capturing_opposing_piece_allowed() {
        let mut board = empty_board();
        place(&mut board, "d4", PieceKind::Rook, Color::White);
        place(&mut board, "d7", PieceKind::Queen, Color::Black);
        assert!(legal(&board, "d4", "d7"));
    }
}
