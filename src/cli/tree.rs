//! Display the prerequisite tree of one course.
//!
//! The tree is built from the resolved graph: every child line names a course
//! and the concepts of the edge that links it to its parent. With `--invert`
//! the tree lists the courses that build on the selected one instead.
//!
//! # Examples
//!
//! ```bash
//! cursus tree Compilation
//! cursus tree Projet --semester S4 --depth 2
//! cursus tree Algorithmique --invert
//! ```
//!
//! # Output
//!
//! ```text
//! Compilation[S5]
//! ├── Automates[S4] (automate, grammaire)
//! │   └── Logique[S2] (ensemble)
//! └── Algorithmique[S2] (tri)
//!     └── Programmation[S1] (boucle, variable)
//!
//! 4 transitive prerequisites
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use strsim::levenshtein;

use crate::config::CursusConfig;
use crate::core::{CourseId, Curriculum, CursusError, Semester};
use crate::ingest::load_curriculum;
use crate::resolver::resolve;

/// Maximum number of titles offered when a lookup fails.
const MAX_SUGGESTIONS: usize = 3;

/// Command to display the prerequisite tree of a course.
#[derive(Args)]
pub struct TreeCommand {
    /// Title of the course, matched exactly
    course: String,

    /// Semester of the course, when several courses share the title
    #[arg(short, long)]
    semester: Option<Semester>,

    /// Maximum depth of the tree (unlimited by default)
    #[arg(short, long)]
    depth: Option<usize>,

    /// Show the courses depending on this one instead of its prerequisites
    #[arg(long)]
    invert: bool,

    /// Curriculum document to read (default: `input` from cursus.toml, else cursus.xml)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
}

impl TreeCommand {
    pub async fn execute(self, settings: &CursusConfig) -> Result<()> {
        if self.depth == Some(0) {
            return Err(CursusError::Other {
                message: "--depth must be at least 1".to_string(),
            }
            .into());
        }

        let input = self.input.clone().unwrap_or_else(|| settings.input.clone());
        let curriculum = load_curriculum(&input).await?;
        let root = self.select_course(&curriculum)?;

        let resolution = resolve(&curriculum);
        let graph = &resolution.graph;
        let tree = graph.to_tree_string(&curriculum, root, self.invert, self.depth);

        let mut lines = tree.lines();
        if let Some(first) = lines.next() {
            println!("{}", first.cyan().bold());
        }
        for line in lines {
            println!("{line}");
        }

        let (count, noun) = if self.invert {
            (graph.transitive_dependents(root).len(), "transitive dependents")
        } else {
            (graph.transitive_prerequisites(root).len(), "transitive prerequisites")
        };
        println!();
        println!("{} {noun}", count.to_string().bold());
        Ok(())
    }

    fn select_course(&self, curriculum: &Curriculum) -> Result<CourseId, CursusError> {
        let matches = curriculum.find_by_title(&self.course);
        if matches.is_empty() {
            return Err(CursusError::CourseNotFound {
                title: self.course.clone(),
                similar: similar_titles(curriculum, &self.course),
            });
        }

        let candidates: Vec<CourseId> = match self.semester {
            Some(semester) => matches
                .iter()
                .copied()
                .filter(|id| curriculum.course(*id).semester() == semester)
                .collect(),
            None => matches.clone(),
        };

        match candidates.as_slice() {
            [single] => Ok(*single),
            [] => Err(CursusError::CourseNotFound {
                title: format!("{}[{}]", self.course, self.semester.map_or_else(String::new, |s| s.to_string())),
                similar: matches.iter().map(|id| curriculum.label(*id)).collect(),
            }),
            several => Err(CursusError::AmbiguousCourse {
                title: self.course.clone(),
                semesters: several
                    .iter()
                    .map(|id| curriculum.course(*id).semester().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// Titles closest to `title`, nearest first, without duplicates.
fn similar_titles(curriculum: &Curriculum, title: &str) -> Vec<String> {
    let max_distance = (title.chars().count() / 3).max(2);
    let mut scored: Vec<(usize, &str)> = Vec::new();
    for (_, course) in curriculum.iter() {
        let candidate = course.title();
        if scored.iter().any(|(_, seen)| *seen == candidate) {
            continue;
        }
        let distance = levenshtein(&title.to_lowercase(), &candidate.to_lowercase());
        if distance <= max_distance {
            scored.push((distance, candidate));
        }
    }
    scored.sort_by_key(|(distance, _)| *distance);
    scored.into_iter().take(MAX_SUGGESTIONS).map(|(_, t)| t.to_string()).collect()
}
