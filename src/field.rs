//! Tic-tac-toe field: a fixed-size grid of [`Cell`]s with change listeners.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::common::{Cell, FieldError};
use crate::config::{RANDOM_DIMENSION_MAX, RANDOM_DIMENSION_MIN};

/// Token identifying one listener registration.
///
/// Returned by [`TicTacToeField::subscribe`]; pass it back to
/// [`TicTacToeField::unsubscribe`] to stop notifications. Ids are never reused
/// within one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut()>;

/// Serializable field contents, without listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldState {
    pub rows: usize,
    pub columns: usize,
    /// Row-major cell values, `rows * columns` long.
    pub cells: Vec<Cell>,
}

/// Grid of `rows x columns` cells.
///
/// Every successful [`set_cell`](Self::set_cell) notifies all subscribed
/// listeners, in subscription order, with no arguments. The field is
/// single-threaded: listeners are not `Send`, so callers sharing a field
/// across threads must wrap it themselves.
pub struct TicTacToeField {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl TicTacToeField {
    /// Create an empty field. Both dimensions must be at least 1.
    pub fn new(rows: usize, columns: usize) -> Result<Self, FieldError> {
        if rows == 0 || columns == 0 {
            return Err(FieldError::InvalidDimension { rows, columns });
        }
        let len = rows
            .checked_mul(columns)
            .ok_or(FieldError::InvalidDimension { rows, columns })?;
        debug!("new field {}x{}", rows, columns);
        Ok(TicTacToeField {
            rows,
            columns,
            cells: vec![Cell::Empty; len],
            listeners: Vec::new(),
            next_listener: 0,
        })
    }

    /// Field with random dimensions in `[RANDOM_DIMENSION_MIN, RANDOM_DIMENSION_MAX)`
    /// and every cell randomly marked by one of the two players.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let rows = rng.random_range(RANDOM_DIMENSION_MIN..RANDOM_DIMENSION_MAX);
        let columns = rng.random_range(RANDOM_DIMENSION_MIN..RANDOM_DIMENSION_MAX);
        let mut field = TicTacToeField {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
            listeners: Vec::new(),
            next_listener: 0,
        };
        field.fill_random(rng);
        field
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a field has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, FieldError> {
        if row >= self.rows || column >= self.columns {
            return Err(FieldError::OutOfBounds { row, column });
        }
        Ok(row * self.columns + column)
    }

    /// Value at `(row, column)`.
    pub fn get_cell(&self, row: usize, column: usize) -> Result<Cell, FieldError> {
        let idx = self.index(row, column)?;
        Ok(self.cells[idx])
    }

    /// Overwrite `(row, column)` with `value` and notify every listener.
    ///
    /// The previous value is not checked. On error nothing is written and no
    /// listener runs.
    pub fn set_cell(&mut self, row: usize, column: usize, value: Cell) -> Result<(), FieldError> {
        let idx = self.index(row, column)?;
        self.cells[idx] = value;
        trace!("cell ({}, {}) = {:?}", row, column, value);
        self.notify();
        Ok(())
    }

    /// Mark every cell with a coin flip between the two players.
    ///
    /// Listeners run once per cell, as if [`set_cell`](Self::set_cell) had been
    /// called for each coordinate in row-major order.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R) {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let value = if rng.random::<bool>() {
                    Cell::PlayerOne
                } else {
                    Cell::PlayerTwo
                };
                let idx = row * self.columns + column;
                self.cells[idx] = value;
                self.notify();
            }
        }
    }

    /// Register `listener`; it runs after every cell change until unsubscribed.
    ///
    /// Registering the same closure logic twice yields two independent
    /// registrations, each invoked per change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        trace!("subscribed listener {:?}", id);
        id
    }

    /// Drop the registration `id`. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|(lid, _)| *lid == id) {
            Some(pos) => {
                self.listeners.remove(pos);
                trace!("unsubscribed listener {:?}", id);
                true
            }
            None => false,
        }
    }

    /// Number of active registrations.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }
}

impl fmt::Debug for TicTacToeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicTacToeField")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("cells", &self.cells)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl From<&TicTacToeField> for FieldState {
    fn from(f: &TicTacToeField) -> Self {
        FieldState {
            rows: f.rows,
            columns: f.columns,
            cells: f.cells.clone(),
        }
    }
}

impl TryFrom<FieldState> for TicTacToeField {
    type Error = FieldError;

    fn try_from(state: FieldState) -> Result<Self, Self::Error> {
        let mut field = TicTacToeField::new(state.rows, state.columns)?;
        if state.cells.len() != field.cells.len() {
            return Err(FieldError::CellCountMismatch {
                expected: field.cells.len(),
                actual: state.cells.len(),
            });
        }
        field.cells = state.cells;
        Ok(field)
    }
}
