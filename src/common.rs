//! Common types for tic-tac-toe: cell values and field errors.

/// Value held by a single grid coordinate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Nobody has marked this cell.
    #[default]
    Empty,
    /// Marked by the first player.
    PlayerOne,
    /// Marked by the second player.
    PlayerTwo,
}

impl Cell {
    /// Returns `true` for [`Cell::Empty`].
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Errors returned by field operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Field was requested with zero rows or zero columns.
    InvalidDimension { rows: usize, columns: usize },
    /// Coordinate lies outside `[0, rows) x [0, columns)`.
    OutOfBounds { row: usize, column: usize },
    /// Turn placement on a cell that is already marked.
    CellOccupied { row: usize, column: usize },
    /// Snapshot cell count does not match `rows * columns`.
    CellCountMismatch { expected: usize, actual: usize },
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::InvalidDimension { rows, columns } => write!(
                f,
                "Invalid field dimensions {}x{}: both must be at least 1",
                rows, columns
            ),
            FieldError::OutOfBounds { row, column } => {
                write!(f, "Coordinate ({}, {}) is outside the field", row, column)
            }
            FieldError::CellOccupied { row, column } => {
                write!(f, "Cell ({}, {}) is already marked", row, column)
            }
            FieldError::CellCountMismatch { expected, actual } => write!(
                f,
                "Snapshot holds {} cells but its dimensions need {}",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}
