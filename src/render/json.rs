//! JSON export of the resolved graph.

use anyhow::Result;
use serde::Serialize;

use crate::core::{Curriculum, Semester};
use crate::resolver::Resolution;

#[derive(Debug, Serialize)]
pub struct GraphDocument {
    pub semesters: Vec<SemesterEntry>,
    pub edges: Vec<EdgeEntry>,
}

#[derive(Debug, Serialize)]
pub struct SemesterEntry {
    pub semester: Semester,
    pub courses: Vec<CourseEntry>,
}

#[derive(Debug, Serialize)]
pub struct CourseEntry {
    pub id: String,
    pub title: String,
}

/// `from` is the prerequisite, `to` the dependent course.
#[derive(Debug, Serialize)]
pub struct EdgeEntry {
    pub from: String,
    pub to: String,
    pub concepts: Vec<String>,
}

impl GraphDocument {
    pub fn build(curriculum: &Curriculum, resolution: &Resolution, id_prefix: &str) -> Self {
        let ids = &resolution.identifiers;
        let semesters = resolution
            .partition
            .iter()
            .map(|(semester, courses)| SemesterEntry {
                semester,
                courses: courses
                    .iter()
                    .map(|course| CourseEntry {
                        id: ids.key(*course, id_prefix),
                        title: curriculum.course(*course).title().to_string(),
                    })
                    .collect(),
            })
            .collect();

        let edges = resolution
            .graph
            .edges()
            .map(|edge| EdgeEntry {
                from: ids.key(edge.prerequisite, id_prefix),
                to: ids.key(edge.dependent, id_prefix),
                concepts: edge
                    .concepts
                    .iter()
                    .map(|concept| curriculum.concept_name(*concept).to_string())
                    .collect(),
            })
            .collect();

        Self {
            semesters,
            edges,
        }
    }
}

/// Pretty-printed JSON document, terminated by a newline.
pub fn render_json(curriculum: &Curriculum, resolution: &Resolution, id_prefix: &str) -> Result<String> {
    let document = GraphDocument::build(curriculum, resolution, id_prefix);
    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');
    Ok(text)
}
