//! Courses and the curriculum arena that owns them.
//!
//! Courses are addressed by [`CourseId`], their position in the input. Two
//! courses with the same title, semester and concepts are still two distinct
//! courses: nothing in the crate keys a map by course value.

use std::fmt;

use crate::core::{ConceptId, ConceptRegistry, Semester};

/// Handle to a course in a [`Curriculum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(usize);

impl CourseId {
    /// Position of the course in the input order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "course#{}", self.0)
    }
}

/// A course: what it teaches and what it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    title: String,
    semester: Semester,
    new_concepts: Vec<ConceptId>,
    dependencies: Vec<ConceptId>,
}

impl Course {
    /// Build a course from already interned concepts.
    pub fn new(
        title: impl Into<String>,
        semester: Semester,
        new_concepts: Vec<ConceptId>,
        dependencies: Vec<ConceptId>,
    ) -> Self {
        Self {
            title: title.into(),
            semester,
            new_concepts,
            dependencies,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn semester(&self) -> Semester {
        self.semester
    }

    /// Concepts this course introduces, in declaration order.
    pub fn new_concepts(&self) -> &[ConceptId] {
        &self.new_concepts
    }

    /// Concepts this course requires, in declaration order.
    pub fn dependencies(&self) -> &[ConceptId] {
        &self.dependencies
    }

    pub fn introduces(&self, concept: ConceptId) -> bool {
        self.new_concepts.contains(&concept)
    }

    pub fn requires(&self, concept: ConceptId) -> bool {
        self.dependencies.contains(&concept)
    }
}

/// The ingested curriculum: every course in input order plus the concept
/// registry their concepts were interned in.
#[derive(Debug, Default, Clone)]
pub struct Curriculum {
    concepts: ConceptRegistry,
    courses: Vec<Course>,
}

impl Curriculum {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to the registry, for ingestion.
    pub fn concepts_mut(&mut self) -> &mut ConceptRegistry {
        &mut self.concepts
    }

    pub fn concepts(&self) -> &ConceptRegistry {
        &self.concepts
    }

    /// Append a course and return its handle.
    pub fn push(&mut self, course: Course) -> CourseId {
        self.courses.push(course);
        CourseId(self.courses.len() - 1)
    }

    /// Intern the given concept names and append the course.
    pub fn add_course(
        &mut self,
        title: impl Into<String>,
        semester: Semester,
        new_concepts: &[&str],
        dependencies: &[&str],
    ) -> CourseId {
        let new_concepts = new_concepts.iter().map(|name| self.concepts.intern(name)).collect();
        let dependencies = dependencies.iter().map(|name| self.concepts.intern(name)).collect();
        self.push(Course::new(title, semester, new_concepts, dependencies))
    }

    /// The course behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not come from this curriculum.
    #[must_use]
    pub fn course(&self, id: CourseId) -> &Course {
        &self.courses[id.0]
    }

    /// All courses with their handles, in input order.
    pub fn iter(&self) -> impl Iterator<Item = (CourseId, &Course)> {
        self.courses.iter().enumerate().map(|(index, course)| (CourseId(index), course))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// `Title[S3]`, the form used in diagnostics.
    #[must_use]
    pub fn label(&self, id: CourseId) -> String {
        let course = self.course(id);
        format!("{}[{}]", course.title, course.semester)
    }

    pub fn concept_name(&self, concept: ConceptId) -> &str {
        self.concepts.name(concept)
    }

    /// Courses whose title is exactly `title`, in input order.
    pub fn find_by_title(&self, title: &str) -> Vec<CourseId> {
        self.iter().filter(|(_, course)| course.title == title).map(|(id, _)| id).collect()
    }
}
