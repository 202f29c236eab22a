//! Generic name-keyed multi-map of shared entity handles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A labeled multi-map from entity name to an ordered list of handles.
///
/// Used for the teacher and class memberships of a course, and for
/// host-level course rosters. The collection never owns its elements —
/// entries are handles that may appear in any number of other collections.
/// Insertion order within a name group is preserved; iteration order across
/// groups is unspecified (hash order). Empty groups are never stored: the
/// last removal of an item prunes its group.
///
/// Lookups are sentinel-based, never panicking: [`get`](Self::get) returns a
/// slice that is empty when the name is absent, and the removal methods
/// report a miss as `false`.
///
/// # Example
///
/// ```
/// use timegrid::{HolderId, NamedCollection};
///
/// let mut teachers = NamedCollection::new("Teachers");
/// teachers.append("Alex", HolderId(0));
/// teachers.append("Alex", HolderId(1));
/// teachers.append("Bob", HolderId(2));
///
/// assert_eq!(teachers.get("Alex"), &[HolderId(0), HolderId(1)]);
/// assert_eq!(teachers.get("Carol"), &[]);
/// assert_eq!(teachers.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCollection<T> {
    label: String,
    groups: HashMap<String, Vec<T>>,
}

impl<T> NamedCollection<T> {
    /// Create an empty collection with a display label ("Teachers", ...).
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            groups: HashMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Add an item under `name`, creating the group if absent.
    ///
    /// Callers pass the entity's current name; the
    /// [`Timetable`](crate::timetable::Timetable) convenience methods do this
    /// resolution so that every entry under a key carries that key's name.
    pub fn append(&mut self, name: impl Into<String>, item: T) {
        self.groups.entry(name.into()).or_default().push(item);
    }

    /// All items registered under `name`, empty when the name is absent.
    pub fn get(&self, name: &str) -> &[T] {
        self.groups.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Delete the entire group for `name`. Returns `false` on a miss.
    pub fn remove_group(&mut self, name: &str) -> bool {
        self.groups.remove(name).is_some()
    }

    /// Merge another collection in, concatenating lists for shared keys.
    pub fn extend(&mut self, other: NamedCollection<T>) {
        for (name, items) in other.groups {
            self.groups.entry(name).or_default().extend(items);
        }
    }

    /// Deduplicated group keys, in unspecified order.
    pub fn names(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Total element count across all groups (not the group count).
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate every item, group by group, insertion order within a group.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.groups.values().flatten()
    }
}

impl<T: PartialEq> NamedCollection<T> {
    /// Remove the first occurrence of `item` from the group for `name`.
    ///
    /// Returns `false` when the name or the item is absent. The group is
    /// pruned when its last item is removed.
    pub fn remove_item(&mut self, name: &str, item: &T) -> bool {
        let Some(group) = self.groups.get_mut(name) else {
            return false;
        };
        let Some(pos) = group.iter().position(|existing| existing == item) else {
            return false;
        };
        group.remove(pos);
        if group.is_empty() {
            self.groups.remove(name);
        }
        true
    }
}

impl<'a, T> IntoIterator for &'a NamedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Flatten<std::collections::hash_map::Values<'a, String, Vec<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.values().flatten()
    }
}
