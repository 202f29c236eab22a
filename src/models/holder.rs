//! Teachers and classes: the two symmetric owners of a grid.

use crate::error::Result;
use crate::models::{CourseId, Grid};
use serde::{Deserialize, Serialize};

/// Tag distinguishing the two holder variants.
///
/// Teachers and classes behave identically; the kind only matters for
/// display and for the host application's own bookkeeping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolderKind {
    Teacher,
    Class,
}

impl std::fmt::Display for HolderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolderKind::Teacher => write!(f, "Teacher"),
            HolderKind::Class => write!(f, "Class"),
        }
    }
}

/// A named teacher or class owning exactly one grid.
///
/// The grid's display name always matches the holder's name; renaming the
/// holder re-synchronizes it. Placement and reconciliation go through the
/// [`Timetable`](crate::timetable::Timetable) registry because they touch
/// the slot bookkeeping of courses in other arena entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holder {
    name: String,
    kind: HolderKind,
    grid: Grid,
}

impl Holder {
    /// A holder with a zero-size grid; every cell access errors.
    pub fn empty(kind: HolderKind, name: impl Into<String>) -> Self {
        Self::with_grid(kind, 0, 0, name)
    }

    /// A holder with a freshly allocated empty grid of the given dimensions.
    pub fn with_grid(kind: HolderKind, rows: usize, cols: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        let grid = Grid::new(rows, cols, name.clone());
        Self { name, kind, grid }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> HolderKind {
        self.kind
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Rename the holder, keeping the owned grid's name in sync.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.grid.set_name(self.name.clone());
    }

    /// The course occupying `(row, col)` of this holder's grid, if any.
    pub fn course_at(&self, row: usize, col: usize) -> Result<Option<CourseId>> {
        self.grid.get(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_grid_names_match() {
        let holder = Holder::with_grid(HolderKind::Teacher, 3, 3, "Alex");
        assert_eq!(holder.name(), "Alex");
        assert_eq!(holder.grid().name(), "Alex");
        assert_eq!(holder.kind(), HolderKind::Teacher);
    }

    #[test]
    fn rename_keeps_grid_name_in_sync() {
        let mut holder = Holder::with_grid(HolderKind::Class, 2, 2, "J1A");
        holder.rename("J1B");
        assert_eq!(holder.name(), "J1B");
        assert_eq!(holder.grid().name(), "J1B");
    }

    #[test]
    fn empty_holder_has_zero_size_grid() {
        let holder = Holder::empty(HolderKind::Teacher, "Bob");
        assert_eq!(holder.grid().rows(), 0);
        assert!(holder.course_at(0, 0).is_err());
    }

    #[test]
    fn kind_display() {
        assert_eq!(HolderKind::Teacher.to_string(), "Teacher");
        assert_eq!(HolderKind::Class.to_string(), "Class");
    }
}
