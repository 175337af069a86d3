//! Fluent builder for curriculum documents.

use std::fmt::Write;

/// One `<course>` element, fields as they will appear in the document.
#[derive(Clone, Debug)]
struct CourseEntry {
    title: String,
    semester: String,
    new_concepts: String,
    dependencies: String,
}

/// Builds a curriculum XML document course by course.
///
/// Semesters and concept lists are written verbatim, so malformed values
/// can be produced on purpose.
#[derive(Clone, Debug, Default)]
pub struct CurriculumBuilder {
    courses: Vec<CourseEntry>,
}

impl CurriculumBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a course. Concept lists are comma-separated.
    #[must_use]
    pub fn course(mut self, title: &str, semester: &str, new_concepts: &str, dependencies: &str) -> Self {
        self.courses.push(CourseEntry {
            title: title.to_string(),
            semester: semester.to_string(),
            new_concepts: new_concepts.to_string(),
            dependencies: dependencies.to_string(),
        });
        self
    }

    /// Render the document.
    pub fn build(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<cursus>\n");
        for course in &self.courses {
            let _ = writeln!(xml, "  <course title=\"{}\">", escape(&course.title));
            let _ = writeln!(xml, "    <semester>{}</semester>", escape(&course.semester));
            let _ = writeln!(xml, "    <new-concept>{}</new-concept>", escape(&course.new_concepts));
            let _ = writeln!(
                xml,
                "    <dependency-concept>{}</dependency-concept>",
                escape(&course.dependencies)
            );
            xml.push_str("  </course>\n");
        }
        xml.push_str("</cursus>\n");
        xml
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
