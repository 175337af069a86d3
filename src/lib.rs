//! cursus - curriculum prerequisite graph generator
//!
//! Reads a curriculum where every course belongs to a semester and lists the
//! concepts it introduces and the concepts it requires, links each course to
//! the courses that provide its prerequisites, and renders the resulting graph
//! as a Mermaid flowchart (or JSON).
//!
//! # Architecture Overview
//!
//! ```text
//! cursus.xml ──► ingest ──► Curriculum ──┬──► validation ──► warnings
//!                                        └──► resolver ──► Resolution ──► render
//! ```
//!
//! ## Resolution Rules
//!
//! - A required concept is looked up in the nearest preceding semester that
//!   introduces it, and only there; every introducer in that semester becomes
//!   a prerequisite.
//! - When no earlier semester introduces it, every course of the same semester
//!   introducing it is a prerequisite, the requiring course included.
//! - Otherwise the requirement is left unresolved.
//! - All concepts satisfied by the same prerequisite share one labeled edge.
//!
//! # Core Modules
//!
//! - [`core`] - Concepts, semesters, courses and the error type
//! - [`ingest`] - XML curriculum reader
//! - [`validation`] - Duplicate-introduction and undefined-concept checks
//! - [`resolver`] - Semester partition, dependency graph and identifiers
//! - [`render`] - Mermaid and JSON output
//! - [`config`] - `cursus.toml` settings
//! - [`cli`] - The `cursus` command-line interface
//!
//! # Example
//!
//! ```rust
//! use cursus_cli::ingest::parse_curriculum;
//! use cursus_cli::render::MermaidRenderer;
//! use cursus_cli::resolver::resolve;
//!
//! let curriculum = parse_curriculum(
//!     r#"<cursus>
//!          <course title="Programmation">
//!            <semester>S1</semester>
//!            <new-concept>variable</new-concept>
//!            <dependency-concept/>
//!          </course>
//!          <course title="Algorithmique">
//!            <semester>S2</semester>
//!            <new-concept>tri</new-concept>
//!            <dependency-concept>variable</dependency-concept>
//!          </course>
//!        </cursus>"#,
//! )?;
//!
//! let resolution = resolve(&curriculum);
//! let diagram = MermaidRenderer::default().render(&curriculum, &resolution);
//! assert!(diagram.ends_with("id0 --variable--> id1\n"));
//! # Ok::<(), cursus_cli::core::CursusError>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod ingest;
pub mod render;
pub mod resolver;
pub mod validation;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
