//! Course dependency resolution.
//!
//! Turns the concepts each course requires into edges towards the courses that
//! teach them. For a course `c` in semester `S` and each concept `k` it
//! requires, in declaration order:
//!
//! 1. **Nearest earlier semester**: walk the semesters before `S` from the
//!    closest one back to `S1`. In the first semester where some course
//!    introduces `k`, every introducer becomes a prerequisite of `c` for `k`,
//!    and the walk stops. Older introductions of `k` are ignored.
//! 2. **Same semester**: if no earlier semester teaches `k`, every course of
//!    `S` introducing `k` becomes a prerequisite, `c` itself included.
//! 3. **Unresolved**: otherwise `k` produces no edge and no diagnostic. This
//!    covers concepts only taught in a later semester.
//!
//! Courses are processed semester by semester, so the resulting
//! [`DependencyGraph`] iterates in that order; inside a course, prerequisites
//! appear in the order they were first reached.
//!
//! # Examples
//!
//! ```rust
//! use cursus_cli::core::{Curriculum, Semester};
//! use cursus_cli::resolver::resolve;
//!
//! let mut curriculum = Curriculum::new();
//! let old = curriculum.add_course("Intro", Semester::S1, &["k"], &[]);
//! let recent = curriculum.add_course("Revision", Semester::S3, &["k"], &["k"]);
//! let user = curriculum.add_course("Project", Semester::S5, &[], &["k"]);
//!
//! let resolution = resolve(&curriculum);
//! let prerequisites = resolution.graph.prerequisites(user).unwrap();
//! assert!(prerequisites.contains_key(&recent));
//! assert!(!prerequisites.contains_key(&old));
//! ```

pub mod dependency_graph;
pub mod identifiers;
pub mod partition;

pub use dependency_graph::{ConceptSet, DependencyGraph, Edge};
pub use identifiers::CourseIdentifiers;
pub use partition::SemesterPartition;

use tracing::{debug, trace};

use crate::core::{ConceptId, CourseId, Curriculum, Semester};

/// Resolves every course of a curriculum against a [`SemesterPartition`].
pub struct DependencyResolver<'a> {
    curriculum: &'a Curriculum,
    partition: &'a SemesterPartition,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(curriculum: &'a Curriculum, partition: &'a SemesterPartition) -> Self {
        Self {
            curriculum,
            partition,
        }
    }

    /// Build the dependency graph.
    pub fn resolve(&self) -> DependencyGraph {
        let mut graph = DependencyGraph::new(self.curriculum);

        for (semester, courses) in self.partition.iter() {
            for course in courses {
                graph.insert_course(*course);
                for concept in self.curriculum.course(*course).dependencies() {
                    self.resolve_concept(&mut graph, *course, semester, *concept);
                }
            }
        }

        debug!(
            courses = self.curriculum.len(),
            edges = graph.edge_count(),
            "dependency graph resolved"
        );
        graph
    }

    fn resolve_concept(
        &self,
        graph: &mut DependencyGraph,
        course: CourseId,
        semester: Semester,
        concept: ConceptId,
    ) {
        for previous in semester.preceding() {
            let sources = self.partition.introducers(previous, concept);
            if !sources.is_empty() {
                trace!(
                    course = %self.curriculum.label(course),
                    concept = self.curriculum.concept_name(concept),
                    semester = %previous,
                    "resolved in earlier semester"
                );
                for source in sources {
                    graph.add_edge(course, *source, concept);
                }
                return;
            }
        }

        // Linear scan of the whole semester, not the per-semester index.
        let mut found = false;
        for candidate in self.partition.courses_in(semester) {
            if self.curriculum.course(*candidate).introduces(concept) {
                graph.add_edge(course, *candidate, concept);
                found = true;
            }
        }

        if found {
            trace!(
                course = %self.curriculum.label(course),
                concept = self.curriculum.concept_name(concept),
                "resolved in same semester"
            );
        } else {
            trace!(
                course = %self.curriculum.label(course),
                concept = self.curriculum.concept_name(concept),
                "left unresolved"
            );
        }
    }
}

/// Everything the renderers need.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub partition: SemesterPartition,
    pub graph: DependencyGraph,
    pub identifiers: CourseIdentifiers,
}

/// Partition, resolve and assign identifiers in one go.
pub fn resolve(curriculum: &Curriculum) -> Resolution {
    let partition = SemesterPartition::new(curriculum);
    let graph = DependencyResolver::new(curriculum, &partition).resolve();
    let identifiers = CourseIdentifiers::assign(curriculum);
    Resolution {
        partition,
        graph,
        identifiers,
    }
}
