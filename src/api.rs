//! Diagnostic DTOs for the timetable model.
//!
//! These types carry no compatibility guarantee: their `Display` output is
//! for humans and logs, and their serialized shape may change. The data
//! contract of the model is the [`Timetable`](crate::timetable::Timetable)
//! API itself.

use crate::models::{HolderKind, Slot};
use serde::{Deserialize, Serialize};

/// Summary of one course: name, deduplicated member names, current slot.
///
/// Built by [`Timetable::describe_course`](crate::timetable::Timetable::describe_course).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub name: String,
    pub teachers: Vec<String>,
    pub classes: Vec<String>,
    pub slot: Option<Slot>,
}

impl std::fmt::Display for CourseSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Course(name={}, teachers={}, classes={}",
            self.name,
            self.teachers.join(", "),
            self.classes.join(", ")
        )?;
        if let Some(slot) = self.slot {
            write!(f, ", slot={slot}")?;
        }
        write!(f, ")")
    }
}

/// Point-in-time rendering of a holder's grid with occupant course names.
///
/// Built by [`Timetable::snapshot`](crate::timetable::Timetable::snapshot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub name: String,
    pub kind: HolderKind,
    pub rows: usize,
    pub cols: usize,
    /// `cells[row][col]` is the occupant's name, or `None` for an empty slot.
    pub cells: Vec<Vec<Option<String>>>,
}

impl std::fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}: name={}", self.kind, self.name)?;
        for row in &self.cells {
            let rendered: Vec<&str> = row
                .iter()
                .map(|cell| cell.as_deref().unwrap_or("-"))
                .collect();
            writeln!(f, "  {}", rendered.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_summary_display() {
        let summary = CourseSummary {
            name: "Chinese".to_string(),
            teachers: vec!["Alex".to_string(), "Bob".to_string()],
            classes: vec!["J1A".to_string()],
            slot: Some(Slot::new(0, 0)),
        };
        assert_eq!(
            summary.to_string(),
            "Course(name=Chinese, teachers=Alex, Bob, classes=J1A, slot=(0, 0))"
        );
    }

    #[test]
    fn unscheduled_summary_omits_the_slot() {
        let summary = CourseSummary {
            name: "Math".to_string(),
            teachers: vec![],
            classes: vec![],
            slot: None,
        };
        assert_eq!(summary.to_string(), "Course(name=Math, teachers=, classes=)");
    }

    #[test]
    fn grid_snapshot_display_renders_a_table() {
        let snapshot = GridSnapshot {
            name: "Alex".to_string(),
            kind: HolderKind::Teacher,
            rows: 2,
            cols: 2,
            cells: vec![
                vec![Some("Chinese".to_string()), None],
                vec![None, None],
            ],
        };
        let rendered = snapshot.to_string();
        assert!(rendered.starts_with("Teacher: name=Alex\n"));
        assert!(rendered.contains("Chinese | -"));
        assert!(rendered.contains("- | -"));
    }
}
