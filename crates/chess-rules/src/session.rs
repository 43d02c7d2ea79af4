//! The live game session: one board, one turn, one move history.

use crate::{rules, Board, Color, Coord, PieceKind};
use std::fmt;
use thiserror::Error;

/// Boxed error type for sink implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Durable store for finished games.
///
/// Invoked by [`GameSession`] exactly once per winning move, before the
/// session resets, with the winner and the full move history including the
/// winning move. The sink assigns the game its identity.
pub trait GameRecordSink {
    /// Persists a finished game and returns its assigned id.
    fn save_game(&self, winner: Color, history: &[String]) -> Result<i64, BoxError>;
}

/// Error from applying a move.
///
/// Rejected moves are not errors; they come back as [`MoveOutcome`]
/// variants. This only covers genuine faults in the persistence
/// collaborator.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to persist finished game")]
    Persist(#[source] BoxError),
}

/// The result of a move request, one variant per outcome message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A square did not parse as `[a-h][1-8]`.
    InvalidSquare,
    /// The origin square is empty.
    NoPiece,
    /// The piece on the origin square belongs to the player not on turn.
    WrongTurn(Color),
    /// The move violates the piece's movement rules.
    IllegalMove,
    /// The move was applied and the turn passed to the opponent.
    Moved { from: Coord, to: Coord },
    /// The move captured the opposing king; the game was persisted and the
    /// session reset.
    Win { winner: Color },
}

impl MoveOutcome {
    /// Returns true for the two accepted-move variants.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. } | MoveOutcome::Win { .. })
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::InvalidSquare => write!(f, "Invalid square."),
            MoveOutcome::NoPiece => write!(f, "No piece at the selected square."),
            MoveOutcome::WrongTurn(color) => {
                write!(f, "It is not {}'s turn.", color.name_lower())
            }
            MoveOutcome::IllegalMove => write!(f, "Invalid move."),
            MoveOutcome::Moved { from, to } => write!(f, "Move made: {} -> {}", from, to),
            MoveOutcome::Win { winner } => write!(
                f,
                "{} wins by capturing the king! The game has been reset.",
                winner
            ),
        }
    }
}

/// A two-player game in progress.
///
/// The process holds exactly one session for its whole lifetime; every
/// caller plays on the same board. The session itself does no locking, so
/// concurrent callers must serialize access to it (the server keeps it
/// behind a mutex).
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    turn: Color,
    history: Vec<String>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session at the canonical starting position, white to move.
    pub fn new() -> Self {
        GameSession {
            board: Board::standard(),
            turn: Color::White,
            history: Vec::new(),
        }
    }

    /// Read-only view of the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color whose turn it is.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The move history of the game in progress, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Restores the canonical setup, white to move, empty history.
    pub fn reset(&mut self) {
        self.board = Board::standard();
        self.turn = Color::White;
        self.history.clear();
    }

    /// Validates and applies a move.
    ///
    /// Rejections come back as `Ok` with the describing [`MoveOutcome`];
    /// the session is unchanged in every rejection case. A move that
    /// captures the opposing king is persisted to `sink` and the session is
    /// reset, in that order, so a reset board is never observable while its
    /// game record is unsaved. If the sink fails, the error propagates and
    /// the reset does not happen.
    pub fn apply_move(
        &mut self,
        from: &str,
        to: &str,
        author: &str,
        sink: &dyn GameRecordSink,
    ) -> Result<MoveOutcome, SessionError> {
        let (from_coord, to_coord) = match (Coord::parse(from), Coord::parse(to)) {
            (Some(f), Some(t)) => (f, t),
            _ => return Ok(MoveOutcome::InvalidSquare),
        };

        let piece = match self.board.piece_at(from_coord) {
            Some(piece) => piece,
            None => return Ok(MoveOutcome::NoPiece),
        };

        // The rejected piece's color is by definition not the turn color,
        // so naming it here matches naming the turn's opposite.
        if piece.color != self.turn {
            return Ok(MoveOutcome::WrongTurn(piece.color));
        }

        if !rules::is_legal(&self.board, from_coord, to_coord, piece) {
            return Ok(MoveOutcome::IllegalMove);
        }

        let mut record = format!("{}: {} -> {}", piece.color, from_coord, to_coord);
        if !author.is_empty() {
            record.push_str(" by ");
            record.push_str(author);
        }
        self.history.push(record);

        // Capturing the opposing king ends the game. The board is about to
        // be reset, so the winning piece is never physically moved.
        let target = self.board.piece_at(to_coord);
        if target.is_some_and(|t| t.kind == PieceKind::King && t.color != piece.color) {
            let winner = piece.color;
            sink.save_game(winner, &self.history)
                .map_err(SessionError::Persist)?;
            self.reset();
            return Ok(MoveOutcome::Win { winner });
        }

        self.board.set(to_coord, Some(piece));
        self.board.set(from_coord, None);
        self.turn = self.turn.opposite();

        Ok(MoveOutcome::Moved {
            from: from_coord,
            to: to_coord,
        })
    }
}
