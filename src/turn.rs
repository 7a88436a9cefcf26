//! Caller-owned turn tracking. The field itself knows nothing about turns.

use log::debug;

use crate::common::{Cell, FieldError};
use crate::field::TicTacToeField;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Cell value this player writes.
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Whose turn it is. Starts with [`Player::One`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    current: Player,
}

impl Default for Turn {
    fn default() -> Self {
        Self::new()
    }
}

impl Turn {
    pub fn new() -> Self {
        Self {
            current: Player::One,
        }
    }

    /// Player expected to move next.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Mark `(row, column)` for the current player and pass the turn.
    ///
    /// Only empty cells are accepted. A rejected placement leaves both the
    /// field and the turn untouched. Returns the player who moved.
    pub fn place(
        &mut self,
        field: &mut TicTacToeField,
        row: usize,
        column: usize,
    ) -> Result<Player, FieldError> {
        if !field.get_cell(row, column)?.is_empty() {
            return Err(FieldError::CellOccupied { row, column });
        }
        let mover = self.current;
        field.set_cell(row, column, mover.cell())?;
        self.current = mover.opponent();
        debug!("{:?} marked ({}, {})", mover, row, column);
        Ok(mover)
    }

    /// Give the move back to [`Player::One`].
    pub fn reset(&mut self) {
        self.current = Player::One;
    }
}
