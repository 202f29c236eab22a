//! Courses: named entities linking teachers and classes, with an
//! authoritative slot position.

use crate::models::{HolderId, NamedCollection};
use serde::{Deserialize, Serialize};

/// A course's current grid coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
}

impl Slot {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Teacher or class membership supplied to course construction and the
/// membership setters.
///
/// Replaces the dynamic type-dispatch of ad-hoc membership inputs with an
/// explicit enumerated kind: nothing, a single holder, a plain list of
/// holders (grouped by name at resolution time), or a pre-built collection
/// taken as-is. Each use builds a fresh value, so unrelated courses can
/// never alias a shared default.
#[derive(Debug, Clone, Default)]
pub enum Members {
    #[default]
    None,
    One(HolderId),
    Many(Vec<HolderId>),
    Collection(NamedCollection<HolderId>),
}

impl From<HolderId> for Members {
    fn from(id: HolderId) -> Self {
        Members::One(id)
    }
}

impl From<Vec<HolderId>> for Members {
    fn from(ids: Vec<HolderId>) -> Self {
        Members::Many(ids)
    }
}

impl From<NamedCollection<HolderId>> for Members {
    fn from(collection: NamedCollection<HolderId>) -> Self {
        Members::Collection(collection)
    }
}

/// A named course holding its teacher and class memberships and its own
/// authoritative slot position (or none).
///
/// The relationship to holders is many-to-many, materialized as two
/// independent collections with no automatic inverse-link maintenance: a
/// caller who changes membership must re-invoke
/// [`Timetable::update_course`](crate::timetable::Timetable::update_course)
/// to repropagate the slot into the affected grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    name: String,
    teachers: NamedCollection<HolderId>,
    classes: NamedCollection<HolderId>,
    slot: Option<Slot>,
}

impl Course {
    /// A course with no memberships and no slot.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            teachers: NamedCollection::new("Teachers"),
            classes: NamedCollection::new("Classes"),
            slot: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Current grid coordinates, `None` while unplaced.
    pub fn slot(&self) -> Option<Slot> {
        self.slot
    }

    pub fn is_scheduled(&self) -> bool {
        self.slot.is_some()
    }

    pub(crate) fn set_slot(&mut self, slot: Option<Slot>) {
        self.slot = slot;
    }

    pub fn teachers(&self) -> &NamedCollection<HolderId> {
        &self.teachers
    }

    pub fn classes(&self) -> &NamedCollection<HolderId> {
        &self.classes
    }

    pub(crate) fn teachers_mut(&mut self) -> &mut NamedCollection<HolderId> {
        &mut self.teachers
    }

    pub(crate) fn classes_mut(&mut self) -> &mut NamedCollection<HolderId> {
        &mut self.classes
    }

    pub(crate) fn set_teachers(&mut self, teachers: NamedCollection<HolderId>) {
        self.teachers = teachers;
    }

    pub(crate) fn set_classes(&mut self, classes: NamedCollection<HolderId>) {
        self.classes = classes;
    }

    /// Remove every teacher entry registered under `name`.
    /// Returns `false` when the name is absent.
    pub fn drop_teacher(&mut self, name: &str) -> bool {
        self.teachers.remove_group(name)
    }

    /// Remove every class entry registered under `name`.
    /// Returns `false` when the name is absent.
    pub fn drop_class(&mut self, name: &str) -> bool {
        self.classes.remove_group(name)
    }
}
