//! API handlers for the chess server.

pub mod auth;
pub mod game;
