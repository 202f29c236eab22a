//! The timetable registry: an in-memory arena of holders and courses, plus
//! every operation whose bookkeeping spans more than one entity.
//!
//! Grids and membership collections store handles, never owning references,
//! so the Course↔Holder reference cycle of the domain never materializes as
//! an ownership cycle. A handle is a shared reference in the model's sense:
//! mutating a course's slot through the registry is visible to every
//! collection holding that course's id.

use crate::api::{CourseSummary, GridSnapshot};
use crate::error::{Error, Result};
use crate::models::{
    Course, CourseId, Holder, HolderId, HolderKind, Members, NamedCollection, Slot,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// In-memory registry owning every holder and course of one timetable.
///
/// All data lives in two id-keyed maps with monotonic id counters; handles
/// are never reused. Placement, clearing and reconciliation go through
/// `&mut self`, which is what preserves the shared-mutable-state semantics
/// of the model without interior mutability.
///
/// # Example
///
/// ```
/// use timegrid::Timetable;
///
/// let mut timetable = Timetable::new();
/// let alex = timetable.add_teacher("Alex", 3, 3);
/// let j1a = timetable.add_class("J1A", 3, 3);
/// let chinese = timetable.add_course("Chinese", alex, j1a).unwrap();
///
/// timetable.place(alex, chinese, 0, 0).unwrap();
/// timetable.update_course(chinese).unwrap();
/// assert_eq!(timetable.course_at(j1a, 0, 0).unwrap(), Some(chinese));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    holders: HashMap<HolderId, Holder>,
    courses: HashMap<CourseId, Course>,
    next_holder_id: HolderId,
    next_course_id: CourseId,
}

impl Default for Timetable {
    fn default() -> Self {
        Self::new()
    }
}

impl Timetable {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            holders: HashMap::new(),
            courses: HashMap::new(),
            next_holder_id: HolderId::first(),
            next_course_id: CourseId::first(),
        }
    }

    // ------------------------------------------------------------------
    // Entity registration
    // ------------------------------------------------------------------

    /// Register a holder, returning its fresh handle.
    pub fn insert_holder(&mut self, holder: Holder) -> HolderId {
        let id = self.next_holder_id;
        self.next_holder_id = id.next();
        debug!("registered {} '{}' as holder {}", holder.kind(), holder.name(), id);
        self.holders.insert(id, holder);
        id
    }

    /// Register a teacher with an empty `rows`×`cols` grid.
    pub fn add_teacher(&mut self, name: impl Into<String>, rows: usize, cols: usize) -> HolderId {
        self.insert_holder(Holder::with_grid(HolderKind::Teacher, rows, cols, name))
    }

    /// Register a class with an empty `rows`×`cols` grid.
    pub fn add_class(&mut self, name: impl Into<String>, rows: usize, cols: usize) -> HolderId {
        self.insert_holder(Holder::with_grid(HolderKind::Class, rows, cols, name))
    }

    /// Register a course, returning its fresh handle.
    pub fn insert_course(&mut self, course: Course) -> CourseId {
        let id = self.next_course_id;
        self.next_course_id = id.next();
        debug!("registered course '{}' as course {}", course.name(), id);
        self.courses.insert(id, course);
        id
    }

    /// Register a course with initial teacher and class membership.
    ///
    /// Membership accepts anything convertible to [`Members`]: nothing, a
    /// single holder handle, a list of handles, or a pre-built collection.
    /// Fails when a supplied handle is unknown to this registry.
    pub fn add_course(
        &mut self,
        name: impl Into<String>,
        teachers: impl Into<Members>,
        classes: impl Into<Members>,
    ) -> Result<CourseId> {
        let teachers = self.resolve_members("Teachers", teachers.into())?;
        let classes = self.resolve_members("Classes", classes.into())?;
        let mut course = Course::new(name);
        course.set_teachers(teachers);
        course.set_classes(classes);
        Ok(self.insert_course(course))
    }

    // ------------------------------------------------------------------
    // Entity access
    // ------------------------------------------------------------------

    pub fn holder(&self, id: HolderId) -> Result<&Holder> {
        self.holders.get(&id).ok_or(Error::UnknownHolder(id))
    }

    pub fn holder_mut(&mut self, id: HolderId) -> Result<&mut Holder> {
        self.holders.get_mut(&id).ok_or(Error::UnknownHolder(id))
    }

    pub fn course(&self, id: CourseId) -> Result<&Course> {
        self.courses.get(&id).ok_or(Error::UnknownCourse(id))
    }

    pub fn course_mut(&mut self, id: CourseId) -> Result<&mut Course> {
        self.courses.get_mut(&id).ok_or(Error::UnknownCourse(id))
    }

    pub fn num_holders(&self) -> usize {
        self.holders.len()
    }

    pub fn num_courses(&self) -> usize {
        self.courses.len()
    }

    /// Rename a holder; the owned grid's display name follows.
    pub fn rename_holder(&mut self, id: HolderId, name: impl Into<String>) -> Result<()> {
        self.holder_mut(id)?.rename(name);
        Ok(())
    }

    /// Rename a course.
    ///
    /// Collections in other entities keyed by the old name go stale, exactly
    /// as membership changes do; re-grouping is the caller's concern.
    pub fn rename_course(&mut self, id: CourseId, name: impl Into<String>) -> Result<()> {
        self.course_mut(id)?.set_name(name);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------

    /// Place a course into a holder's grid at `(row, col)`.
    ///
    /// If the target cell is occupied, the old occupant is evicted first and
    /// its recorded slot detached; the placed course's slot becomes
    /// `(row, col)`. There is no check that the course isn't already placed
    /// elsewhere — a course can occupy multiple grids simultaneously, and
    /// the last write to its slot wins.
    pub fn place(
        &mut self,
        holder: HolderId,
        course: CourseId,
        row: usize,
        col: usize,
    ) -> Result<()> {
        if !self.courses.contains_key(&course) {
            return Err(Error::UnknownCourse(course));
        }
        let entry = self
            .holders
            .get_mut(&holder)
            .ok_or(Error::UnknownHolder(holder))?;
        let evicted = entry.grid_mut().place(course, row, col)?;
        if let Some(old) = evicted {
            if let Some(previous) = self.courses.get_mut(&old) {
                previous.set_slot(None);
            }
        }
        if let Some(current) = self.courses.get_mut(&course) {
            current.set_slot(Some(Slot::new(row, col)));
        }
        debug!(
            "placed course {} at ({}, {}) on holder {}",
            course, row, col, holder
        );
        Ok(())
    }

    /// Empty a cell of a holder's grid, detaching the occupant's recorded
    /// slot. Clearing an already-empty cell is a no-op.
    pub fn clear_slot(&mut self, holder: HolderId, row: usize, col: usize) -> Result<()> {
        let entry = self
            .holders
            .get_mut(&holder)
            .ok_or(Error::UnknownHolder(holder))?;
        let cleared = entry.grid_mut().clear(row, col)?;
        if let Some(id) = cleared {
            if let Some(course) = self.courses.get_mut(&id) {
                course.set_slot(None);
            }
            debug!(
                "cleared course {} from ({}, {}) on holder {}",
                id, row, col, holder
            );
        }
        Ok(())
    }

    /// The course occupying `(row, col)` of a holder's grid, if any.
    pub fn course_at(&self, holder: HolderId, row: usize, col: usize) -> Result<Option<CourseId>> {
        self.holder(holder)?.course_at(row, col)
    }

    // ------------------------------------------------------------------
    // Membership wiring
    // ------------------------------------------------------------------

    /// Append a teacher to a course's teacher collection, grouped under the
    /// holder's current name.
    pub fn add_course_teacher(&mut self, course: CourseId, holder: HolderId) -> Result<()> {
        let name = self.holder(holder)?.name().to_string();
        self.course_mut(course)?.teachers_mut().append(name, holder);
        Ok(())
    }

    /// Append a class to a course's class collection, grouped under the
    /// holder's current name.
    pub fn add_course_class(&mut self, course: CourseId, holder: HolderId) -> Result<()> {
        let name = self.holder(holder)?.name().to_string();
        self.course_mut(course)?.classes_mut().append(name, holder);
        Ok(())
    }

    /// Replace a course's teacher collection.
    pub fn set_course_teachers(
        &mut self,
        course: CourseId,
        teachers: impl Into<Members>,
    ) -> Result<()> {
        let resolved = self.resolve_members("Teachers", teachers.into())?;
        self.course_mut(course)?.set_teachers(resolved);
        Ok(())
    }

    /// Replace a course's class collection.
    pub fn set_course_classes(
        &mut self,
        course: CourseId,
        classes: impl Into<Members>,
    ) -> Result<()> {
        let resolved = self.resolve_members("Classes", classes.into())?;
        self.course_mut(course)?.set_classes(resolved);
        Ok(())
    }

    fn resolve_members(&self, label: &str, members: Members) -> Result<NamedCollection<HolderId>> {
        match members {
            Members::None => Ok(NamedCollection::new(label)),
            Members::One(id) => {
                let mut collection = NamedCollection::new(label);
                collection.append(self.holder(id)?.name().to_string(), id);
                Ok(collection)
            }
            Members::Many(ids) => {
                let mut collection = NamedCollection::new(label);
                for id in ids {
                    collection.append(self.holder(id)?.name().to_string(), id);
                }
                Ok(collection)
            }
            Members::Collection(collection) => Ok(collection),
        }
    }

    // ------------------------------------------------------------------
    // Reconciliation
    // ------------------------------------------------------------------

    /// Push a course's authoritative slot into every holder referencing it.
    ///
    /// For each teacher and then each class in the course's collections, the
    /// course is placed into that holder's grid at the course's recorded
    /// coordinates, evicting whatever occupied the cell — an authoritative
    /// course always wins, even over unrelated courses already scheduled
    /// there. A course without a slot is a no-op.
    ///
    /// Reconciliation is on demand, never triggered by membership changes:
    /// after `append`/`remove` on a course's collections the grids are stale
    /// until this is called again.
    pub fn update_course(&mut self, id: CourseId) -> Result<()> {
        let (slot, targets) = {
            let course = self.course(id)?;
            let Some(slot) = course.slot() else {
                return Ok(());
            };
            let targets: Vec<HolderId> = course
                .teachers()
                .iter()
                .copied()
                .chain(course.classes().iter().copied())
                .collect();
            (slot, targets)
        };
        debug!(
            "reconciling course {} at {} across {} holders",
            id,
            slot,
            targets.len()
        );
        for holder in targets {
            self.place(holder, id, slot.row, slot.col)?;
        }
        Ok(())
    }

    /// Reconcile every course currently occupying a cell of the holder's
    /// grid. Occupants are collected up front; a course evicted while an
    /// earlier one propagates simply reconciles as a slotless no-op.
    pub fn update_holder(&mut self, id: HolderId) -> Result<()> {
        let occupants = self.holder(id)?.grid().occupants();
        for course in occupants {
            self.update_course(course)?;
        }
        Ok(())
    }

    /// Reconcile every course in a roster, group by group.
    pub fn update_courses(&mut self, roster: &NamedCollection<CourseId>) -> Result<()> {
        for &course in roster.iter() {
            self.update_course(course)?;
        }
        Ok(())
    }

    /// Run [`update_holder`](Self::update_holder) for every holder in a
    /// collection, group by group.
    pub fn update_holders(&mut self, holders: &NamedCollection<HolderId>) -> Result<()> {
        for &holder in holders.iter() {
            self.update_holder(holder)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Diagnostic summary of a course: its name, the deduplicated teacher
    /// and class names (sorted for stable output), and its slot.
    pub fn describe_course(&self, id: CourseId) -> Result<CourseSummary> {
        let course = self.course(id)?;
        let mut teachers: Vec<String> =
            course.teachers().names().iter().map(|s| s.to_string()).collect();
        teachers.sort_unstable();
        let mut classes: Vec<String> =
            course.classes().names().iter().map(|s| s.to_string()).collect();
        classes.sort_unstable();
        Ok(CourseSummary {
            name: course.name().to_string(),
            teachers,
            classes,
            slot: course.slot(),
        })
    }

    /// Textual snapshot of a holder's grid with occupant course names.
    pub fn snapshot(&self, id: HolderId) -> Result<GridSnapshot> {
        let holder = self.holder(id)?;
        let grid = holder.grid();
        let mut cells = Vec::with_capacity(grid.rows());
        for row in 0..grid.rows() {
            let mut rendered = Vec::with_capacity(grid.cols());
            for col in 0..grid.cols() {
                let occupant = grid.get(row, col)?.map(|course| {
                    self.courses
                        .get(&course)
                        .map(|c| c.name().to_string())
                        .unwrap_or_else(|| course.to_string())
                });
                rendered.push(occupant);
            }
            cells.push(rendered);
        }
        Ok(GridSnapshot {
            name: holder.name().to_string(),
            kind: holder.kind(),
            rows: grid.rows(),
            cols: grid.cols(),
            cells,
        })
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Export the whole model as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuild a registry from [`to_json`](Self::to_json) output.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Timetable, HolderId, CourseId, CourseId) {
        let mut timetable = Timetable::new();
        let alex = timetable.add_teacher("Alex", 3, 3);
        let math = timetable.add_course("Math", alex, Members::None).unwrap();
        let art = timetable.add_course("Art", alex, Members::None).unwrap();
        (timetable, alex, math, art)
    }

    #[test]
    fn placement_is_exclusive_per_cell() {
        let (mut timetable, alex, math, art) = setup();

        timetable.place(alex, math, 1, 1).unwrap();
        assert_eq!(timetable.course(math).unwrap().slot(), Some(Slot::new(1, 1)));

        timetable.place(alex, art, 1, 1).unwrap();
        assert_eq!(timetable.course_at(alex, 1, 1).unwrap(), Some(art));
        // The evicted course's recorded slot is detached.
        assert_eq!(timetable.course(math).unwrap().slot(), None);
        assert_eq!(timetable.course(art).unwrap().slot(), Some(Slot::new(1, 1)));
    }

    #[test]
    fn replacing_a_course_with_itself_keeps_its_slot() {
        let (mut timetable, alex, math, _) = setup();
        timetable.place(alex, math, 0, 0).unwrap();
        timetable.place(alex, math, 0, 0).unwrap();
        assert_eq!(timetable.course(math).unwrap().slot(), Some(Slot::new(0, 0)));
        assert_eq!(timetable.course_at(alex, 0, 0).unwrap(), Some(math));
    }

    #[test]
    fn clearing_detaches_the_recorded_slot() {
        let (mut timetable, alex, math, _) = setup();
        timetable.place(alex, math, 2, 0).unwrap();
        timetable.clear_slot(alex, 2, 0).unwrap();
        assert_eq!(timetable.course_at(alex, 2, 0).unwrap(), None);
        assert_eq!(timetable.course(math).unwrap().slot(), None);
        // Idempotent on an empty cell.
        timetable.clear_slot(alex, 2, 0).unwrap();
    }

    #[test]
    fn a_course_can_occupy_multiple_grids_with_last_slot_winning() {
        let (mut timetable, alex, math, _) = setup();
        let bob = timetable.add_teacher("Bob", 3, 3);

        timetable.place(alex, math, 0, 0).unwrap();
        timetable.place(bob, math, 2, 2).unwrap();

        assert_eq!(timetable.course_at(alex, 0, 0).unwrap(), Some(math));
        assert_eq!(timetable.course_at(bob, 2, 2).unwrap(), Some(math));
        assert_eq!(timetable.course(math).unwrap().slot(), Some(Slot::new(2, 2)));
    }

    #[test]
    fn unknown_handles_are_rejected() {
        let (mut timetable, alex, math, _) = setup();
        let ghost_holder = HolderId(99);
        let ghost_course = CourseId(99);

        assert!(matches!(
            timetable.place(ghost_holder, math, 0, 0),
            Err(Error::UnknownHolder(_))
        ));
        assert!(matches!(
            timetable.place(alex, ghost_course, 0, 0),
            Err(Error::UnknownCourse(_))
        ));
        assert!(timetable.holder(ghost_holder).is_err());
        assert!(timetable.course(ghost_course).is_err());
        assert!(timetable
            .add_course("Ghost", ghost_holder, Members::None)
            .is_err());
    }

    #[test]
    fn update_without_slot_is_a_no_op() {
        let (mut timetable, alex, math, _) = setup();
        timetable.update_course(math).unwrap();
        assert!(timetable.holder(alex).unwrap().grid().is_empty());
    }

    #[test]
    fn membership_resolution_groups_by_holder_name() {
        let mut timetable = Timetable::new();
        let alex = timetable.add_teacher("Alex", 3, 3);
        let bob = timetable.add_teacher("Bob", 3, 3);
        let course = timetable
            .add_course("Chinese", vec![alex, bob], Members::None)
            .unwrap();

        let teachers = timetable.course(course).unwrap().teachers();
        assert_eq!(teachers.get("Alex"), &[alex]);
        assert_eq!(teachers.get("Bob"), &[bob]);
        assert_eq!(teachers.len(), 2);
    }

    #[test]
    fn rename_holder_keeps_grid_in_sync() {
        let (mut timetable, alex, _, _) = setup();
        timetable.rename_holder(alex, "Alexandra").unwrap();
        let holder = timetable.holder(alex).unwrap();
        assert_eq!(holder.name(), "Alexandra");
        assert_eq!(holder.grid().name(), "Alexandra");
    }

    #[test]
    fn placement_out_of_bounds_surfaces_the_grid_error() {
        let (mut timetable, alex, math, _) = setup();
        assert!(matches!(
            timetable.place(alex, math, 3, 0),
            Err(Error::OutOfBounds { .. })
        ));
        // Nothing was recorded on the failed placement.
        assert_eq!(timetable.course(math).unwrap().slot(), None);
    }

    // Property-based placement invariants.

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_last_placement_wins(rows in 1usize..8, cols in 1usize..8, row in 0usize..8, col in 0usize..8) {
            prop_assume!(row < rows && col < cols);

            let mut timetable = Timetable::new();
            let alex = timetable.add_teacher("Alex", rows, cols);
            let first = timetable.add_course("First", alex, Members::None).unwrap();
            let second = timetable.add_course("Second", alex, Members::None).unwrap();

            timetable.place(alex, first, row, col).unwrap();
            timetable.place(alex, second, row, col).unwrap();

            prop_assert_eq!(timetable.course_at(alex, row, col).unwrap(), Some(second));
            prop_assert_eq!(timetable.course(first).unwrap().slot(), None);
            prop_assert_eq!(timetable.course(second).unwrap().slot(), Some(Slot::new(row, col)));
        }

        #[test]
        fn prop_double_clear_equals_single_clear(rows in 1usize..8, cols in 1usize..8, row in 0usize..8, col in 0usize..8) {
            prop_assume!(row < rows && col < cols);

            let mut timetable = Timetable::new();
            let alex = timetable.add_teacher("Alex", rows, cols);
            let course = timetable.add_course("Course", alex, Members::None).unwrap();
            timetable.place(alex, course, row, col).unwrap();

            timetable.clear_slot(alex, row, col).unwrap();
            let once = timetable.clone();
            timetable.clear_slot(alex, row, col).unwrap();

            prop_assert_eq!(timetable.course_at(alex, row, col).unwrap(), None);
            prop_assert_eq!(timetable.course(course).unwrap().slot(), None);
            prop_assert_eq!(
                timetable.holder(alex).unwrap(),
                once.holder(alex).unwrap()
            );
        }
    }
}
