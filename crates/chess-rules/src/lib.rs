//! Rules and state engine for two-player king-capture chess.
//!
//! This crate provides everything needed to run a game:
//! - [`Coord`] for square notation and board coordinates
//! - [`Board`], [`Piece`], and [`Color`] for the position
//! - [`rules::is_legal`] for per-piece move legality
//! - [`GameSession`] for turn enforcement, history, and the win/reset
//!   transition, with finished games handed to a [`GameRecordSink`]
//!
//! Deliberately out of scope, matching the service this engine backs:
//! check and checkmate detection, castling, en passant, promotion, and
//! draws. A game ends only when a king is actually captured.

mod board;
mod color;
mod coord;
mod piece;
pub mod rules;
mod session;

pub use board::Board;
pub use color::Color;
pub use coord::Coord;
pub use piece::{Piece, PieceKind};
pub use session::{BoxError, GameRecordSink, GameSession, MoveOutcome, SessionError};
