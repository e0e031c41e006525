//! Tic-tac-toe field model with change notification.
//!
//! A [`Field`] is a dense `rows × columns` grid of [`Cell`] states. Every
//! write goes through [`Field::set`], which validates the indices, stores
//! the value and then synchronously runs every registered listener in the
//! order they were added. Listeners fire on every write, including writes
//! that store the value the cell already held.
//!
//! Listeners receive a shared reference to the field, so they can read any
//! cell but cannot write back into the field while it is notifying.

use core::fmt;

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use log::trace;
use thiserror_no_std::Error;

/// State of a single cell on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerX,
    PlayerO,
}

/// Error types for field operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Row or column outside the field
    #[error("Invalid indices ({row}, {column}) for a {rows}x{columns} field")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Field created with a zero dimension
    #[error("Rows and columns must be positive (got {rows}x{columns})")]
    InvalidDimensions { rows: usize, columns: usize },
}

/// Result type for field operations
pub type FieldResult<T> = Result<T, FieldError>;

/// Handle returned by [`Field::add_listener`], used to remove that listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Callback run after every cell write.
pub type FieldListener = Box<dyn FnMut(&Field)>;

/// Rows × columns grid of cells with change listeners.
pub struct Field {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    listeners: Vec<(ListenerId, FieldListener)>,
    next_listener_id: u32,
}

impl Field {
    /// Create an all-empty field.
    ///
    /// Returns [`FieldError::InvalidDimensions`] if either dimension is zero
    /// or the cell count overflows `usize`.
    pub fn new(rows: usize, columns: usize) -> FieldResult<Self> {
        let len = rows
            .checked_mul(columns)
            .filter(|len| *len > 0)
            .ok_or(FieldError::InvalidDimensions { rows, columns })?;

        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Empty; len],
            listeners: Vec::new(),
            next_listener_id: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells (`rows * columns`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A valid field always has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(row, column)` addresses a cell of this field.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Read the cell at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> FieldResult<Cell> {
        let index = self.index_of(row, column)?;
        Ok(self.cells[index])
    }

    /// Write the cell at `(row, column)` and notify every listener.
    ///
    /// Listeners run even when `cell` equals the current value.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) -> FieldResult<()> {
        let index = self.index_of(row, column)?;
        self.cells[index] = cell;
        self.notify_listeners();
        Ok(())
    }

    /// Like [`Field::set`], with the value produced by `make_cell`.
    ///
    /// The indices are checked before `make_cell` runs.
    pub fn set_with<F>(&mut self, row: usize, column: usize, make_cell: F) -> FieldResult<()>
    where
        F: FnOnce() -> Cell,
    {
        self.index_of(row, column)?;
        self.set(row, column, make_cell())
    }

    /// Iterate over `(row, column, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / columns, i % columns, *cell))
    }

    /// Register a listener, run after every subsequent write.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Field) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id = self.next_listener_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn index_of(&self, row: usize, column: usize) -> FieldResult<usize> {
        if !self.contains(row, column) {
            return Err(FieldError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }

    fn notify_listeners(&mut self) {
        // Listeners borrow the field immutably, so the list is moved out
        // for the duration of the dispatch.
        let mut listeners = core::mem::take(&mut self.listeners);
        trace!("Notifying {} field listener(s)", listeners.len());
        for (_, listener) in listeners.iter_mut() {
            listener(self);
        }
        self.listeners = listeners;
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("cells", &self.cells)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
