//! Stable short identifiers for rendering.

use indexmap::IndexMap;

use crate::core::{CourseId, Curriculum};

/// Dense identifiers assigned to courses in input order, starting at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseIdentifiers {
    ids: IndexMap<CourseId, usize>,
}

impl CourseIdentifiers {
    /// Walk the courses once, in input order.
    pub fn assign(curriculum: &Curriculum) -> Self {
        let ids = curriculum.iter().enumerate().map(|(counter, (course, _))| (course, counter)).collect();
        Self {
            ids,
        }
    }

    /// Identifier of a course, `None` for a handle from another curriculum.
    pub fn get(&self, course: CourseId) -> Option<usize> {
        self.ids.get(&course).copied()
    }

    /// `prefix` followed by the identifier, e.g. `id3`.
    pub fn key(&self, course: CourseId, prefix: &str) -> String {
        match self.get(course) {
            Some(id) => format!("{prefix}{id}"),
            None => format!("{prefix}?"),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CourseId, usize)> + '_ {
        self.ids.iter().map(|(course, id)| (*course, *id))
    }
}
