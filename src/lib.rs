//! # timegrid
//!
//! A consistent bidirectional school-timetable model.
//!
//! The model is a fixed grid of time slots per teacher or per class,
//! populated with course assignments that stay mutually consistent: placing
//! a course in a teacher's grid is reflected into every class attending the
//! course (and vice versa) through an explicit reconciliation step.
//!
//! ## Model
//!
//! - [`Grid`]: a fixed-size 2D table of optional course occupants, owned by
//!   exactly one holder.
//! - [`Holder`]: a named teacher or class ([`HolderKind`]) owning one grid.
//! - [`NamedCollection`]: a labeled multi-map from name to an ordered list
//!   of shared entity handles.
//! - [`Course`]: a named entity with teacher and class memberships and an
//!   authoritative [`Slot`] position (or none).
//! - [`Timetable`]: the registry owning every entity; all placement and
//!   reconciliation goes through it.
//!
//! Entities are addressed by newtype handles ([`HolderId`], [`CourseId`])
//! into the registry's arena, so the Course↔Holder reference cycle of the
//! domain never becomes an ownership cycle.
//!
//! ## Example
//!
//! ```
//! use timegrid::Timetable;
//!
//! # fn main() -> timegrid::Result<()> {
//! let mut timetable = Timetable::new();
//! let alex = timetable.add_teacher("Alex", 3, 3);
//! let bob = timetable.add_teacher("Bob", 3, 3);
//! let j1a = timetable.add_class("J1A", 3, 3);
//!
//! let chinese = timetable.add_course("Chinese", vec![alex, bob], j1a)?;
//!
//! // Direct placement touches one grid only...
//! timetable.place(alex, chinese, 0, 0)?;
//! assert_eq!(timetable.course_at(j1a, 0, 0)?, None);
//!
//! // ...reconciliation pushes the slot to every member holder.
//! timetable.update_course(chinese)?;
//! assert_eq!(timetable.course_at(bob, 0, 0)?, Some(chinese));
//! assert_eq!(timetable.course_at(j1a, 0, 0)?, Some(chinese));
//! # Ok(())
//! # }
//! ```
//!
//! ## What this crate does not do
//!
//! No conflict detection (an occupied cell is silently overwritten), no
//! automatic assignment, no persistence beyond a JSON export helper, and no
//! time-of-day semantics — coordinates are opaque `(row, col)` pairs.

pub mod api;
pub mod error;
pub mod models;
pub mod timetable;

pub use api::{CourseSummary, GridSnapshot};
pub use error::{Error, Result};
pub use models::{
    Course, CourseId, Grid, Holder, HolderId, HolderKind, Members, NamedCollection, Slot,
};
pub use timetable::Timetable;
