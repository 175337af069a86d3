//! Consistency checks over an ingested curriculum.
//!
//! Two independent checks run over the whole course list:
//!
//! - **Single introduction**: a concept should be introduced by exactly one
//!   course. A course that both requires and introduces a concept is
//!   re-exporting it and does not count as a source.
//! - **Dependency existence**: every required concept must be introduced by
//!   some course, in any semester.
//!
//! Findings never abort a run and never alter the curriculum. They are
//! returned as a [`ValidationReport`] that the caller prints.
//!
//! # Examples
//!
//! ```rust
//! use cursus_cli::core::{Curriculum, Semester};
//! use cursus_cli::validation::validate;
//!
//! let mut curriculum = Curriculum::new();
//! curriculum.add_course("Réseaux", Semester::S3, &["tcp"], &["socket"]);
//!
//! let report = validate(&curriculum);
//! assert_eq!(report.messages(&curriculum), vec!["no concept socket defined for course Réseaux[S3]"]);
//! ```

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use strsim::levenshtein;
use tracing::debug;

use crate::core::{ConceptId, CourseId, Curriculum};

/// Maximum edit distance, in percent of the name length, for a concept name
/// to be offered as a replacement for a dangling one.
const SIMILARITY_THRESHOLD_PERCENT: usize = 40;

/// One problem found by a consistency check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// More than one course introduces the concept without re-exporting it.
    DuplicateIntroduction {
        concept: ConceptId,
        /// The conflicting courses, re-exporters excluded, in input order.
        courses: Vec<CourseId>,
    },
    /// A course requires a concept that no course introduces.
    UndefinedDependency {
        concept: ConceptId,
        course: CourseId,
        /// Closest introduced concept name, if one is close enough.
        similar: Option<ConceptId>,
    },
}

impl ValidationIssue {
    /// Human-readable diagnostic line.
    pub fn message(&self, curriculum: &Curriculum) -> String {
        match self {
            ValidationIssue::DuplicateIntroduction { concept, courses } => {
                let labels: Vec<String> = courses.iter().map(|id| curriculum.label(*id)).collect();
                format!(
                    "concept {} is declared as new by [{}]",
                    curriculum.concept_name(*concept),
                    labels.join(", ")
                )
            }
            ValidationIssue::UndefinedDependency { concept, course, similar } => {
                let mut message = format!(
                    "no concept {} defined for course {}",
                    curriculum.concept_name(*concept),
                    curriculum.label(*course)
                );
                if let Some(similar) = similar {
                    message.push_str(&format!(
                        " (did you mean {}?)",
                        curriculum.concept_name(*similar)
                    ));
                }
                message
            }
        }
    }

    /// Short machine-friendly kind name.
    pub const fn kind(&self) -> &'static str {
        match self {
            ValidationIssue::DuplicateIntroduction { .. } => "duplicate-introduction",
            ValidationIssue::UndefinedDependency { .. } => "undefined-dependency",
        }
    }
}

/// Findings of both checks, duplicate introductions first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// One diagnostic line per issue, in report order.
    pub fn messages(&self, curriculum: &Curriculum) -> Vec<String> {
        self.issues.iter().map(|issue| issue.message(curriculum)).collect()
    }

    /// Serializable form for JSON output.
    pub fn to_entries(&self, curriculum: &Curriculum) -> Vec<ReportEntry> {
        self.issues
            .iter()
            .map(|issue| ReportEntry {
                kind: issue.kind(),
                message: issue.message(curriculum),
            })
            .collect()
    }
}

/// A report line as emitted by `validate --format json`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub kind: &'static str,
    pub message: String,
}

/// Run both checks.
pub fn validate(curriculum: &Curriculum) -> ValidationReport {
    let mut issues = check_single_introduction(curriculum);
    issues.extend(check_dependencies_exist(curriculum));

    for issue in &issues {
        debug!(kind = issue.kind(), "{}", issue.message(curriculum));
    }
    debug!(issues = issues.len(), "validation finished");

    ValidationReport {
        issues,
    }
}

/// Report concepts introduced by more than one originating course.
///
/// Issues come in order of each concept's first introduction.
pub fn check_single_introduction(curriculum: &Curriculum) -> Vec<ValidationIssue> {
    let mut introducers: IndexMap<ConceptId, Vec<CourseId>> = IndexMap::new();
    for (id, course) in curriculum.iter() {
        for concept in course.new_concepts() {
            introducers.entry(*concept).or_default().push(id);
        }
    }

    introducers
        .into_iter()
        .filter_map(|(concept, courses)| {
            let originators: Vec<CourseId> = courses
                .into_iter()
                .filter(|id| !curriculum.course(*id).requires(concept))
                .collect();
            (originators.len() > 1).then_some(ValidationIssue::DuplicateIntroduction {
                concept,
                courses: originators,
            })
        })
        .collect()
}

/// Report required concepts that no course introduces.
///
/// Only global existence is checked: a concept introduced in a later semester
/// than the course requiring it passes.
pub fn check_dependencies_exist(curriculum: &Curriculum) -> Vec<ValidationIssue> {
    let introduced: IndexSet<ConceptId> = curriculum
        .iter()
        .flat_map(|(_, course)| course.new_concepts().iter().copied())
        .collect();

    let mut issues = Vec::new();
    for (id, course) in curriculum.iter() {
        for concept in course.dependencies() {
            if !introduced.contains(concept) {
                issues.push(ValidationIssue::UndefinedDependency {
                    concept: *concept,
                    course: id,
                    similar: closest_concept(curriculum, *concept, &introduced),
                });
            }
        }
    }
    issues
}

fn closest_concept(
    curriculum: &Curriculum,
    target: ConceptId,
    candidates: &IndexSet<ConceptId>,
) -> Option<ConceptId> {
    let name = curriculum.concept_name(target);
    let max_distance = name.chars().count() * SIMILARITY_THRESHOLD_PERCENT / 100;

    candidates
        .iter()
        .map(|candidate| (*candidate, levenshtein(name, curriculum.concept_name(*candidate))))
        .filter(|(_, distance)| *distance <= max_distance)
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}
