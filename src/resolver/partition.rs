//! Per-semester views of a curriculum.

use indexmap::IndexMap;

use crate::core::{ConceptId, CourseId, Curriculum, Semester};

/// Courses grouped by semester, and per semester the courses introducing each
/// concept.
///
/// Only semesters holding at least one course appear, in chronological order.
/// Inside a semester courses keep input order.
#[derive(Debug, Clone, Default)]
pub struct SemesterPartition {
    courses: IndexMap<Semester, Vec<CourseId>>,
    concepts: IndexMap<Semester, IndexMap<ConceptId, Vec<CourseId>>>,
}

impl SemesterPartition {
    pub fn new(curriculum: &Curriculum) -> Self {
        let courses = courses_by_semester(curriculum);
        let concepts = concepts_by_semester(curriculum, &courses);
        Self {
            courses,
            concepts,
        }
    }

    /// Semesters holding at least one course, in chronological order.
    pub fn semesters(&self) -> impl Iterator<Item = Semester> + '_ {
        self.courses.keys().copied()
    }

    /// Semesters with their courses, in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Semester, &[CourseId])> {
        self.courses.iter().map(|(semester, courses)| (*semester, courses.as_slice()))
    }

    /// Courses of a semester, empty when the semester has none.
    pub fn courses_in(&self, semester: Semester) -> &[CourseId] {
        self.courses.get(&semester).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Courses of `semester` introducing `concept`, in semester order.
    pub fn introducers(&self, semester: Semester, concept: ConceptId) -> &[CourseId] {
        self.concepts
            .get(&semester)
            .and_then(|concepts| concepts.get(&concept))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Concept-to-introducers map of one semester.
    pub fn concepts_in(&self, semester: Semester) -> Option<&IndexMap<ConceptId, Vec<CourseId>>> {
        self.concepts.get(&semester)
    }
}

/// Group courses by semester, chronological, input order inside a group.
pub fn courses_by_semester(curriculum: &Curriculum) -> IndexMap<Semester, Vec<CourseId>> {
    let mut groups: IndexMap<Semester, Vec<CourseId>> = IndexMap::new();
    for (id, course) in curriculum.iter() {
        groups.entry(course.semester()).or_default().push(id);
    }
    groups.sort_keys();
    groups
}

/// For each semester, map every newly introduced concept to its introducers.
///
/// Required concepts are not indexed: a concept exists in a semester only
/// where it is taught.
pub fn concepts_by_semester(
    curriculum: &Curriculum,
    courses: &IndexMap<Semester, Vec<CourseId>>,
) -> IndexMap<Semester, IndexMap<ConceptId, Vec<CourseId>>> {
    courses
        .iter()
        .map(|(semester, ids)| {
            let mut concepts: IndexMap<ConceptId, Vec<CourseId>> = IndexMap::new();
            for id in ids {
                for concept in curriculum.course(*id).new_concepts() {
                    concepts.entry(*concept).or_default().push(*id);
                }
            }
            (*semester, concepts)
        })
        .collect()
}
