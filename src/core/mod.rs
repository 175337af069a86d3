//! Core types for cursus
//!
//! This module holds the data model every other module builds on:
//! - [`ConceptRegistry`] / [`ConceptId`] - concept names interned into handles
//! - [`Semester`] - the fixed, ordered set of semesters
//! - [`Course`] / [`CourseId`] / [`Curriculum`] - the course arena, addressed by handle
//! - [`CursusError`] / [`ErrorContext`] - fatal errors and their user-facing form
//!
//! # Examples
//!
//! ```rust
//! use cursus_cli::core::{Curriculum, Semester};
//!
//! let mut curriculum = Curriculum::new();
//! let intro = curriculum.add_course("Programmation", Semester::S1, &["variable", "boucle"], &[]);
//! let algo = curriculum.add_course("Algorithmique", Semester::S2, &["tri"], &["boucle"]);
//!
//! assert_eq!(curriculum.label(algo), "Algorithmique[S2]");
//! assert_eq!(curriculum.course(intro).new_concepts().len(), 2);
//! ```

mod concept;
mod course;
pub mod error;
mod semester;

pub use concept::{ConceptId, ConceptRegistry};
pub use course::{Course, CourseId, Curriculum};
pub use error::{CursusError, ErrorContext, user_friendly_error};
pub use semester::Semester;
