//! Fixed-size slot grid owned by a single teacher or class.

use crate::error::{Error, Result};
use crate::models::CourseId;
use serde::{Deserialize, Serialize};

/// A 2D table of time slots, each either empty or holding one course.
///
/// Dimensions are fixed at construction. Cells are addressed by an explicit
/// `(row, col)` pair; any access outside the bounds fails with
/// [`Error::OutOfBounds`]. A grid stores course handles only — slot
/// bookkeeping across entities is done by the owning
/// [`Timetable`](crate::timetable::Timetable), which is why the mutating
/// cell operations are crate-private.
///
/// # Example
///
/// ```
/// use timegrid::Grid;
///
/// let grid = Grid::new(3, 3, "Alex");
/// assert_eq!(grid.get(0, 0).unwrap(), None);
/// assert!(grid.get(3, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    name: String,
    rows: usize,
    cols: usize,
    cells: Vec<Option<CourseId>>,
}

impl Grid {
    /// Create an empty grid with the given dimensions.
    ///
    /// `Grid::new(0, 0, ..)` is valid and yields a grid where every access
    /// is out of bounds.
    pub fn new(rows: usize, cols: usize, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name follows the owning holder on rename.
    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds {
                grid: self.name.clone(),
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// The occupant of a cell, or `None` if the cell is empty.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<CourseId>> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Store `course` in a cell, returning the evicted previous occupant.
    ///
    /// The caller is responsible for detaching the evicted course's recorded
    /// slot and for recording the new occupant's slot.
    pub(crate) fn place(
        &mut self,
        course: CourseId,
        row: usize,
        col: usize,
    ) -> Result<Option<CourseId>> {
        let idx = self.index(row, col)?;
        let evicted = self.cells[idx].replace(course);
        if let Some(old) = evicted {
            log::debug!(
                "grid '{}': course {} evicted from ({}, {}) by course {}",
                self.name,
                old,
                row,
                col,
                course
            );
        }
        Ok(evicted)
    }

    /// Empty a cell, returning the occupant that was detached.
    ///
    /// Clearing an already-empty cell is a no-op.
    pub(crate) fn clear(&mut self, row: usize, col: usize) -> Result<Option<CourseId>> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx].take())
    }

    /// Distinct occupants in row-major scan order.
    pub fn occupants(&self) -> Vec<CourseId> {
        let mut seen = Vec::new();
        for cell in self.cells.iter().flatten() {
            if !seen.contains(cell) {
                seen.push(*cell);
            }
        }
        seen
    }

    /// True if no cell holds a course.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(2, 3, "test");
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.is_empty());
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(grid.get(row, col).unwrap(), None);
            }
        }
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let grid = Grid::new(2, 2, "small");
        assert!(matches!(
            grid.get(2, 0),
            Err(Error::OutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(grid.get(0, 2).is_err());
    }

    #[test]
    fn zero_size_grid_rejects_every_access() {
        let grid = Grid::new(0, 0, "empty");
        assert!(grid.get(0, 0).is_err());
    }

    #[test]
    fn place_returns_evicted_occupant() {
        let mut grid = Grid::new(2, 2, "test");
        assert_eq!(grid.place(CourseId(1), 0, 0).unwrap(), None);
        assert_eq!(grid.place(CourseId(2), 0, 0).unwrap(), Some(CourseId(1)));
        assert_eq!(grid.get(0, 0).unwrap(), Some(CourseId(2)));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut grid = Grid::new(2, 2, "test");
        grid.place(CourseId(1), 1, 1).unwrap();
        assert_eq!(grid.clear(1, 1).unwrap(), Some(CourseId(1)));
        assert_eq!(grid.clear(1, 1).unwrap(), None);
        assert_eq!(grid.clear(1, 1).unwrap(), None);
        assert!(grid.is_empty());
    }

    #[test]
    fn occupants_are_deduplicated() {
        let mut grid = Grid::new(2, 2, "test");
        grid.place(CourseId(7), 0, 0).unwrap();
        grid.place(CourseId(7), 0, 1).unwrap();
        grid.place(CourseId(9), 1, 0).unwrap();
        assert_eq!(grid.occupants(), vec![CourseId(7), CourseId(9)]);
    }
}
