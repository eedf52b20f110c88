//! Nine-cell board

use super::{Cell, MoveError, Player, TOTAL_CELLS};

/// Game board, cells indexed 0-8 in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Get cell at index, `None` past the last cell
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Check if the cell exists and is empty
    #[inline]
    pub fn is_cell_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Place a mark on an empty cell.
    ///
    /// Leaves the board untouched when the index is out of range or the cell
    /// is taken. Only the controller mutates the board during play.
    pub(crate) fn set(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfBounds(index))?;
        if *cell != Cell::Empty {
            return Err(MoveError::Occupied(index));
        }
        *cell = Cell::Occupied(player);
        Ok(())
    }

    /// True iff no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Number of marks placed
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Empty every cell
    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::Empty; TOTAL_CELLS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
