//! Commonly used types and utilities for ease of import.

pub use crate::{Cell, FieldError, FieldState, ListenerId, Player, TicTacToeField, Turn};

#[cfg(feature = "std")]
pub use crate::{cli::render, init_logging};
