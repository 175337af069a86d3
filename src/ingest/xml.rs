//! XML curriculum reader.
//!
//! Streams the document with `quick-xml` and builds courses as their closing
//! `</course>` tag is reached. Text and attribute values are decoded with the
//! document's declared encoding before entities are expanded. Element names
//! are compared on their local part, so a namespace prefix is accepted and
//! ignored.

use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::fmt;
use tracing::trace;

use crate::core::{ConceptId, Course, CursusError, Curriculum, Semester};
use crate::ingest::parse_concept_list;

const ROOT: &str = "cursus";
const COURSE: &str = "course";
const SEMESTER: &str = "semester";
const NEW_CONCEPT: &str = "new-concept";
const DEPENDENCY_CONCEPT: &str = "dependency-concept";

/// Fields collected for the course being read.
#[derive(Debug, Default)]
struct PendingCourse {
    title: Option<String>,
    semester: Option<Semester>,
    new_concepts: Option<Vec<ConceptId>>,
    dependencies: Option<Vec<ConceptId>>,
}

impl PendingCourse {
    fn finish(self) -> Result<Course, CursusError> {
        let title = self.title.ok_or_else(|| CursusError::MissingField {
            course: "<untitled>".to_string(),
            field: "title".to_string(),
        })?;
        let missing = |field: &str| CursusError::MissingField {
            course: title.clone(),
            field: field.to_string(),
        };
        let semester = self.semester.ok_or_else(|| missing(SEMESTER))?;
        let new_concepts = self.new_concepts.ok_or_else(|| missing(NEW_CONCEPT))?;
        let dependencies = self.dependencies.ok_or_else(|| missing(DEPENDENCY_CONCEPT))?;
        Ok(Course::new(title, semester, new_concepts, dependencies))
    }
}

fn xml_error(position: u64, reason: impl fmt::Display) -> CursusError {
    CursusError::XmlError {
        position,
        reason: reason.to_string(),
    }
}

fn local_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

/// Parse a whole curriculum document.
///
/// Courses keep document order. Concept names are interned in the returned
/// curriculum's registry as they are read. The text is taken as UTF-8 and any
/// `encoding` in the XML declaration is ignored.
pub fn parse_curriculum(content: &str) -> Result<Curriculum, CursusError> {
    read_document(Reader::from_str(content))
}

/// Parse a curriculum document from raw bytes.
///
/// The encoding comes from a byte order mark or from the XML declaration
/// (`<?xml version="1.0" encoding="ISO-8859-1"?>`), UTF-8 otherwise.
pub fn parse_curriculum_bytes(content: &[u8]) -> Result<Curriculum, CursusError> {
    read_document(Reader::from_reader(content))
}

fn read_document(mut reader: Reader<&[u8]>) -> Result<Curriculum, CursusError> {
    reader.config_mut().trim_text(true);

    let mut curriculum = Curriculum::new();
    let mut pending = PendingCourse::default();
    let mut text = String::new();

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => return Err(xml_error(reader.error_position() as u64, e)),
        };
        let position = reader.buffer_position() as u64;
        let decoder = reader.decoder();

        match event {
            Event::Start(element) => {
                open_element(&element, decoder, &mut pending, position)?;
                text.clear();
            }
            Event::Empty(element) => {
                open_element(&element, decoder, &mut pending, position)?;
                text.clear();
                close_element(&local_name(&element), &text, &mut pending, &mut curriculum)?;
            }
            Event::End(element) => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                close_element(&name, &text, &mut pending, &mut curriculum)?;
                text.clear();
            }
            Event::Text(content) => {
                let decoded = decoder.decode(&content).map_err(|e| xml_error(position, e))?;
                let unescaped = unescape(&decoded).map_err(|e| xml_error(position, e))?;
                text.push_str(&unescaped);
            }
            Event::CData(content) => {
                let decoded = decoder.decode(&content).map_err(|e| xml_error(position, e))?;
                text.push_str(&decoded);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(curriculum)
}

fn open_element(
    element: &BytesStart<'_>,
    decoder: Decoder,
    pending: &mut PendingCourse,
    position: u64,
) -> Result<(), CursusError> {
    let name = local_name(element);
    match name.as_str() {
        COURSE => {
            pending.title = match element.try_get_attribute("title").map_err(|e| xml_error(position, e))? {
                Some(attribute) => {
                    let decoded = decoder.decode(&attribute.value).map_err(|e| xml_error(position, e))?;
                    Some(unescape(&decoded).map_err(|e| xml_error(position, e))?.into_owned())
                }
                None => None,
            };
            Ok(())
        }
        ROOT | SEMESTER | NEW_CONCEPT | DEPENDENCY_CONCEPT => Ok(()),
        _ => Err(CursusError::UnknownElement {
            element: name,
        }),
    }
}

fn close_element(
    name: &str,
    text: &str,
    pending: &mut PendingCourse,
    curriculum: &mut Curriculum,
) -> Result<(), CursusError> {
    match name {
        SEMESTER => pending.semester = Some(text.parse()?),
        NEW_CONCEPT => {
            pending.new_concepts = Some(parse_concept_list(text, curriculum.concepts_mut()));
        }
        DEPENDENCY_CONCEPT => {
            pending.dependencies = Some(parse_concept_list(text, curriculum.concepts_mut()));
        }
        COURSE => {
            let course = std::mem::take(pending).finish()?;
            trace!(title = course.title(), semester = %course.semester(), "course read");
            curriculum.push(course);
        }
        ROOT => {}
        _ => {
            return Err(CursusError::UnknownElement {
                element: name.to_string(),
            });
        }
    }
    Ok(())
}
